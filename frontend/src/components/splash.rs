use yew::prelude::*;

use crate::config::COMPANY_NAME;

#[derive(Properties, PartialEq, Clone)]
pub struct LoadingSplashProps {
    pub fading: bool,
}

#[function_component(LoadingSplash)]
pub fn loading_splash(props: &LoadingSplashProps) -> Html {
    html! {
        <div id="loadingPage" class={classes!("loading-page", props.fading.then_some("fade-out"))}>
            <div class="loading-content">
                <div class="loading-logo">
                    <i class="fas fa-code"></i>
                    <span>{COMPANY_NAME}</span>
                </div>
                <div class="loading-spinner"></div>
                <p class="loading-text">{"Innovating your digital future..."}</p>
            </div>
        </div>
    }
}
