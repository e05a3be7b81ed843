mod common;
mod items;
mod report;
