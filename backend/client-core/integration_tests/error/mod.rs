mod dispatch;
mod transport;
