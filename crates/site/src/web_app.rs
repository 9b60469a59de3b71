use leptos::*;
use leptos_meta::*;
use ui_templates::ShowcasePage;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="UI Kit Showcase" />
        <Meta name="description" content="Shared components and URL-bound tab groups." />
        <ShowcasePage />
    }
}
