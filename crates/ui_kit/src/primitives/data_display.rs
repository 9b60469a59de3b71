use super::*;

pub(crate) fn avatar_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

pub(crate) fn skeleton_line_tokens(shape: SkeletonShape, lines: usize) -> Vec<&'static str> {
    match shape {
        SkeletonShape::Text => {
            let lines = lines.max(1);
            (0..lines)
                .map(|line| {
                    if lines > 1 && line + 1 == lines {
                        "short"
                    } else {
                        "full"
                    }
                })
                .collect()
        }
        SkeletonShape::Circle | SkeletonShape::Rect => vec!["full"],
    }
}

#[component]
/// Shared card surface for summaries, form sections, and document-like regions.
pub fn Card(
    #[prop(default = Elevation::Raised)] elevation: Elevation,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] title: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-slot=ui_slot
            data-ui-elevation=elevation.token()
        >
            {title.map(|title| view! { <header data-ui-slot="title">{title}</header> })}
            <div data-ui-slot="body">{children()}</div>
        </article>
    }
}

#[component]
/// Compact status badge primitive.
pub fn Badge(
    #[prop(default = TextTone::Secondary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// User avatar showing an image when available and initials otherwise.
pub fn Avatar(
    #[prop(into)] name: String,
    #[prop(optional, into)] src: Option<String>,
    #[prop(default = AvatarSize::Md)] size: AvatarSize,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let body = match src {
        Some(src) => view! { <img data-ui-slot="image" src=src alt=name.clone() /> }.into_view(),
        None => view! {
            <span data-ui-slot="initials" aria-hidden="true">{avatar_initials(&name)}</span>
        }
        .into_view(),
    };
    view! {
        <span
            class=merge_layout_class("ui-avatar", layout_class)
            title=name
            data-ui-primitive="true"
            data-ui-kind="avatar"
            data-ui-size=size.token()
        >
            {body}
        </span>
    }
}

#[component]
/// Loading placeholder with the rough footprint of the content it stands in for.
pub fn Skeleton(
    #[prop(default = SkeletonShape::Text)] shape: SkeletonShape,
    #[prop(default = 1)] lines: usize,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-skeleton", layout_class)
            aria-busy="true"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="skeleton"
            data-ui-variant=shape.token()
        >
            {skeleton_line_tokens(shape, lines)
                .into_iter()
                .map(|width| view! { <span data-ui-slot="line" data-ui-width=width></span> })
                .collect_view()}
        </div>
    }
}
