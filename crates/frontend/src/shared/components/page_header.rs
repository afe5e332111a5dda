use leptos::prelude::*;

/// PageHeader component: leading media, title, subtitle and trailing actions
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Content placed before the title (avatar, icon)
    #[prop(optional)]
    leading: Option<ChildrenFn>,

    /// Content placed right after the title (badges)
    #[prop(optional)]
    badges: Option<ChildrenFn>,

    /// Actions on the right
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                {leading.map(|l| l())}
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle page-header__subtitle--condensed">{s}</div>
                    })}
                </div>
                {badges.map(|b| b())}
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
