use leptos::prelude::*;

#[component]
pub fn Footer(line: String) -> impl IntoView {
    view! {
        <footer class="landing-footer">
            <p>{line}</p>
        </footer>
    }
}
