//! Multi-component workflow tests.

mod pan_zoom_tests;
mod toolbar_tests;
