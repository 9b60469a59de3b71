use super::*;

/// ARIA role for a menu entry: plain action, or one choice of a radio group when `checked` is set.
pub(crate) fn menu_item_role(checkable: bool) -> &'static str {
    if checkable {
        "menuitemradio"
    } else {
        "menuitem"
    }
}

#[component]
/// Menu container; flat inside cards, overlay-elevated when floating.
pub fn MenuSurface(
    #[prop(default = Elevation::Overlay)] elevation: Elevation,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu", layout_class)
            role="menu"
            aria-label=aria_label
            aria-orientation="vertical"
            data-ui-primitive="true"
            data-ui-kind="menu"
            data-ui-slot=ui_slot
            data-ui-elevation=elevation.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Menu entry. Passing `checked` turns it into a radio choice with `aria-checked`.
pub fn MenuItem(
    #[prop(optional, into)] checked: Option<Signal<bool>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let is_checked = move || checked.map(|checked| checked.get()).unwrap_or(false);
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-menu-item", layout_class)
            role=menu_item_role(checked.is_some())
            aria-checked=move || checked.map(|checked| bool_token(checked.get()))
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="menu-item"
            data-ui-state=move || if is_checked() { "checked" } else { "idle" }
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if disabled.get_untracked() {
                    return;
                }
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Divider between menu groups.
pub fn MenuSeparator(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    view! {
        <hr
            class=merge_layout_class("ui-menu-separator", layout_class)
            role="separator"
            data-ui-primitive="true"
            data-ui-kind="menu-separator"
        />
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn checkable_items_are_radio_choices() {
        assert_eq!(menu_item_role(true), "menuitemradio");
        assert_eq!(menu_item_role(false), "menuitem");
    }
}
