mod post_draft_builder;
mod records;
mod session;
