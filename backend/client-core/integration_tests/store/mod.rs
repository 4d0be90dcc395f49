mod concurrency;
mod helpers;
mod lifecycle;
mod listeners;
mod one_shot;
