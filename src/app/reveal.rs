use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Fades its children in the first time they scroll into view.
#[component]
pub fn Reveal(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(el);
    let (revealed, set_revealed) = signal(false);

    // one-way latch: leaving the viewport again doesn't hide the content
    Effect::new(move |_| {
        if visible.get() {
            set_revealed.set(true);
        }
    });

    view! {
        <div
            node_ref=el
            class=move || {
                if revealed.get() { format!("reveal revealed {class}") } else { format!("reveal {class}") }
            }
        >
            {children()}
        </div>
    }
}
