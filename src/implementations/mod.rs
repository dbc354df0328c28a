mod convert;
mod debug;
mod display;
mod from_str;
