use std::future::Future;
use std::rc::Rc;

use common::query::{Begin, QueryCache, QueryView, Resolution};
use common::QueryParams;
use yew::prelude::*;

use crate::common::toast::ToastContext;

/// State of a query plus a way to fetch it again.
pub struct QueryHandle<T, P> {
    pub view: QueryView<T>,
    /// Fetches `P` bypassing the cache and makes it the current request.
    pub refetch: Callback<P>,
}

/// Fetches `params` whenever they change and keeps every response in a
/// [`QueryCache`] keyed by the request parameters.
///
/// The hook is the only writer of the cache; callers get a snapshot. A
/// response that arrives after a newer request started is cached but not
/// displayed, and a failed request toasts its error once and leaves the
/// displayed data as it was.
#[hook]
pub fn use_query<P, T, F, Fut>(params: Option<P>, fetch: F) -> QueryHandle<T, P>
where
    P: QueryParams + Clone + PartialEq + 'static,
    T: Clone + 'static,
    F: Fn(P) -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let cache = use_mut_ref(QueryCache::<T>::new);
    let requested = use_mut_ref(|| None::<P>);
    let fetch = use_state(|| Rc::new(fetch));
    let force_update = use_force_update();
    let toast_ctx = use_context::<ToastContext>();

    let run: Rc<dyn Fn(P, bool)> = {
        let cache = cache.clone();
        let fetch = (*fetch).clone();
        Rc::new(move |params: P, force: bool| {
            // Release the borrow before anything can trigger a render.
            let begin = cache.borrow_mut().begin(params.request_key(), force);
            let ticket = match begin {
                Begin::Cached => {
                    log::debug!("Serving {} from cache", params.request_key());
                    force_update.force_update();
                    return;
                }
                Begin::Fetch(ticket) => ticket,
            };
            force_update.force_update();

            let request = fetch(params);
            let cache = cache.clone();
            let force_update = force_update.clone();
            let toast_ctx = toast_ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let key = ticket.key().clone();
                let result = request.await;
                let resolution = cache.borrow_mut().resolve(ticket, result);
                match resolution {
                    Resolution::Applied => log::debug!("Query {} applied", key),
                    Resolution::Failed(message) => {
                        log::error!("Query {} failed: {}", key, message);
                        match &toast_ctx {
                            Some(toast_ctx) => toast_ctx.show_error(message),
                            None => log::warn!("No toast provider for query errors"),
                        }
                    }
                    Resolution::Stored => log::debug!("Query {} finished late, cached only", key),
                    Resolution::Discarded => log::debug!("Query {} finished late, ignored", key),
                }
                force_update.force_update();
            });
        })
    };

    {
        let run = run.clone();
        let requested = requested.clone();
        use_effect_with(params, move |params| {
            if let Some(params) = params {
                let changed = requested.borrow().as_ref() != Some(params);
                if changed {
                    *requested.borrow_mut() = Some(params.clone());
                    run(params.clone(), false);
                }
            }
            || ()
        });
    }

    let refetch = Callback::from(move |params: P| {
        *requested.borrow_mut() = Some(params.clone());
        run(params, true);
    });

    let view = cache.borrow().view();
    QueryHandle { view, refetch }
}
