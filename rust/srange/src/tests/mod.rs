mod construction_tests;
mod cursor_tests;
