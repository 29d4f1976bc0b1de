// ============================================================================
// USE SESSION HOOK - Follow a SessionStore from Yew components
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::state::{SessionAction, SessionState, SessionStore};

#[derive(Clone)]
pub struct UseSessionHandle {
    pub state: Rc<SessionState>,
    pub store: Rc<SessionStore>,
    pub dispatch: Callback<SessionAction>,
}

impl PartialEq for UseSessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state) && Rc::ptr_eq(&self.store, &other.store)
    }
}

impl UseSessionHandle {
    pub fn is_logged_in(&self) -> bool {
        self.state.is_logged_in()
    }
}

/// Re-renders the calling component on every store mutation.
#[hook]
pub fn use_session_store(store: Rc<SessionStore>) -> UseSessionHandle {
    let state = use_state(|| store.snapshot());

    {
        let store = store.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            let id = store.subscribe(move |snapshot| state.set(snapshot.clone()));
            move || store.unsubscribe(id)
        });
    }

    let dispatch = {
        let store = store.clone();
        Callback::from(move |action: SessionAction| {
            if let Err(e) = store.dispatch(action) {
                log::error!("❌ Session update failed: {}", e);
            }
        })
    };

    UseSessionHandle {
        state: (*state).clone(),
        store,
        dispatch,
    }
}
