use leptos::prelude::*;

/// Square or round avatar: an image when `src` is set, the fallback text otherwise
#[component]
pub fn Avatar(
    #[prop(optional, into)]
    src: MaybeProp<String>,
    /// Text shown without an image (usually one letter)
    #[prop(optional, into)]
    fallback: MaybeProp<String>,
    /// "sm", "md" (default) or "xl"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    #[prop(optional)]
    square: bool,
    /// Inline style applied to the image (theme icon filters)
    #[prop(optional, into)]
    image_style: MaybeProp<String>,
) -> impl IntoView {
    let class = move || {
        let size = match size.get().as_deref() {
            Some("sm") => "avatar--sm",
            Some("xl") => "avatar--xl",
            _ => "avatar--md",
        };
        let shape = if square { "avatar--square" } else { "avatar--round" };
        format!("avatar {} {}", size, shape)
    };

    view! {
        <div class=class>
            {move || match src.get().filter(|s| !s.is_empty()) {
                Some(url) => view! {
                    <img class="avatar__image" src=url alt="" style=move || image_style.get().unwrap_or_default() />
                }.into_any(),
                None => view! {
                    <span class="avatar__fallback">{fallback.get().unwrap_or_default()}</span>
                }.into_any(),
            }}
        </div>
    }
}
