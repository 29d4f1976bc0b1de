// ============================================================================
// SESSION CONTEXT - Share the session store with every component
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_session::{use_session_store, UseSessionHandle};
use crate::state::SessionStore;

/// Opens the localStorage-backed store once and provides it below.
#[function_component(SessionContextProvider)]
pub fn session_context_provider(props: &SessionContextProviderProps) -> Html {
    let store = use_memo((), |_| SessionStore::open_browser());
    let session_handle = use_session_store(store);

    html! {
        <ContextProvider<UseSessionHandle> context={session_handle}>
            {props.children.clone()}
        </ContextProvider<UseSessionHandle>>
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionContextProviderProps {
    pub children: Children,
}

/// Session handle from the nearest [`SessionContextProvider`].
#[hook]
pub fn use_session() -> Option<UseSessionHandle> {
    use_context::<UseSessionHandle>()
}
