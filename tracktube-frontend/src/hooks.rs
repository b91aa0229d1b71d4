use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use yew::platform::spawn_local;
use yew::prelude::*;
use yew::suspense::{Suspension, SuspensionResult};

enum AsyncState<R> {
    Idle,
    Pending(Suspension),
    Ready(Rc<R>),
}

/// Runs a future once per change of `deps`, suspending the component until
/// it resolves.
///
/// Changing the deps abandons the previous run entirely: the old future may
/// still complete, but its result lands in a state slot nothing reads
/// anymore. That makes the deps tuple double as a generation token for
/// overlapping submissions.
#[hook]
pub fn use_async_suspension<FF, F, D, R>(future: FF, deps: D) -> SuspensionResult<Rc<R>>
where
    FF: 'static + FnOnce(D) -> F,
    F: 'static + Future<Output = R>,
    D: 'static + PartialEq + Clone,
    R: 'static,
{
    let slot: Rc<RefCell<AsyncState<R>>> =
        use_memo(deps.clone(), |_| RefCell::new(AsyncState::Idle));
    let mut state = slot.borrow_mut();
    match *state {
        AsyncState::Pending(ref suspension) => Err(suspension.clone()),
        AsyncState::Ready(ref result) => Ok(result.clone()),
        AsyncState::Idle => {
            let (suspension, handle) = Suspension::new();
            *state = AsyncState::Pending(suspension.clone());
            drop(state);
            spawn_local(async move {
                let result = future(deps).await;
                *slot.borrow_mut() = AsyncState::Ready(Rc::new(result));
                handle.resume();
            });
            Err(suspension)
        }
    }
}
