use aquaflow_core::IconKind;
use leptos::prelude::*;

/// Inline SVG for an [`IconKind`], stroked with `currentColor` on a 24×24 grid.
#[component]
pub fn Icon(
    kind: IconKind,
    /// Extra CSS classes (size and color come from the stylesheet)
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-icon=kind.label()
        >
            {kind.paths().iter().map(|d| view! { <path d=*d></path> }).collect::<Vec<_>>()}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_one_path_per_segment() {
        let html = view! { <Icon kind=IconKind::Mail /> }.to_html();
        assert!(html.contains("<svg"));
        assert_eq!(html.matches("<path").count(), IconKind::Mail.paths().len());
        assert!(html.contains("stroke=\"currentColor\""));
    }

    #[test]
    fn custom_class_is_applied() {
        let html = view! { <Icon kind=IconKind::Star class="icon icon-star" /> }.to_html();
        assert!(html.contains("icon icon-star"));
    }
}
