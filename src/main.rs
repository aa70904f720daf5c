//! SafeEats Menu Manager Entry Point

mod aggregator;
mod api;
mod app;
mod components;
mod context;
mod form;
mod models;
mod price;
mod session;
mod slots;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
