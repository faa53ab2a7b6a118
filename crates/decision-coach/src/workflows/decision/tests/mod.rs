mod coach;
mod common;
