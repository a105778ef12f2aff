use homewatch_dashboard::App;

fn main() {
    tracing_wasm::set_as_global_default();
    leptos::mount::mount_to_body(App);
}
