//! Top-level view switching.

use leptos::prelude::*;
use leptos_meta::*;
use letterpress_core::NewsletterId;

use crate::components::{EditorView, ManagementView, PreviewView};

/// What the app is showing.
#[derive(Debug, Clone, PartialEq)]
enum Mode {
    List,
    Create,
    Edit(NewsletterId),
    Preview(NewsletterId),
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let mode = RwSignal::new(Mode::List);

    let show_list = Callback::new(move |()| mode.set(Mode::List));
    let create = Callback::new(move |()| mode.set(Mode::Create));
    let edit = Callback::new(move |id: NewsletterId| mode.set(Mode::Edit(id)));
    let preview = Callback::new(move |id: NewsletterId| mode.set(Mode::Preview(id)));

    view! {
        <Title text="Letterpress"/>
        <Meta name="description" content="Compose HTML email newsletters"/>

        <header class="app-header">
            <h1 class="app-title" on:click=move |_| show_list.run(())>"Letterpress"</h1>
        </header>
        <main class="app-main">
            {move || match mode.get() {
                Mode::List => view! {
                    <ManagementView on_create=create on_edit=edit on_preview=preview/>
                }
                .into_any(),
                Mode::Create => view! { <EditorView id=None on_back=show_list/> }.into_any(),
                Mode::Edit(id) => view! { <EditorView id=Some(id) on_back=show_list/> }.into_any(),
                Mode::Preview(id) => view! {
                    <PreviewView id=id on_back=show_list on_edit=edit/>
                }
                .into_any(),
            }}
        </main>
    }
}
