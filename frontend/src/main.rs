use codentra_frontend::{config, App};

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    gloo_console::log!(format!("{} site loaded", config::COMPANY_NAME));
    yew::Renderer::<App>::new().render();
}
