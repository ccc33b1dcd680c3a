//! The asynchronous retrieval boundary: component modules, export lookup
//! and the retriever wrapper the slot invokes at most once.

use std::collections::HashMap;
use std::future::Future;

use dioxus::prelude::*;
use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;

use crate::utils::{CCStr, CheapClone};

/// A retrieved "module": renderable components keyed by export name.
pub type ModuleMap<P> = HashMap<String, SlotComponent<P>>;

/// Builds a [`ModuleMap`] from `"export" => component` pairs.
///
/// ```rust,ignore
/// let module = module_map! {
///     "default" => HeavyChart,
///     "compact" => CompactChart,
/// };
/// ```
#[macro_export]
macro_rules! module_map {
    ($($key:expr => $component:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut map = $crate::retrieval::ModuleMap::new();
        $(
            map.insert(
                ::std::string::String::from($key),
                $crate::retrieval::SlotComponent::new($component),
            );
        )*
        map
    }};
}

/// A renderable component bound for a slot: any `Fn(P) -> Element` behind a
/// cheap clone.
///
/// Cloning bumps a reference count and equality is pointer identity, so a
/// `SlotComponent` can sit in component props without forcing the render
/// function itself to be comparable.
pub struct SlotComponent<P>(CheapClone<dyn Fn(P) -> Element>);

impl<P> SlotComponent<P> {
    pub fn new(render: impl Fn(P) -> Element + 'static) -> Self {
        let render: CheapClone<dyn Fn(P) -> Element> = CheapClone::new(render);
        Self(render)
    }

    /// Renders the component with the given props.
    pub fn render(&self, props: P) -> Element {
        (self.0)(props)
    }
}

impl<P: 'static> From<Component<P>> for SlotComponent<P> {
    fn from(component: Component<P>) -> Self {
        Self::new(component)
    }
}

impl<P> Clone for SlotComponent<P> {
    fn clone(&self) -> Self {
        Self(CheapClone::clone(&self.0))
    }
}
impl<P> PartialEq for SlotComponent<P> {
    fn eq(&self, other: &Self) -> bool {
        CheapClone::ptr_eq(&self.0, &other.0)
    }
}
impl<P> core::fmt::Debug for SlotComponent<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SlotComponent").finish_non_exhaustive()
    }
}

/// The asynchronous module fetch, as configured by the caller.
///
/// Wraps a `Fn() -> Future<Output = Result<ModuleMap<P>, CCStr>>` so it can
/// travel through props the same way [`SlotComponent`] does: reference-count
/// clones, pointer-identity equality.
pub struct Retriever<P: 'static>(
    CheapClone<dyn Fn() -> LocalBoxFuture<'static, Result<ModuleMap<P>, CCStr>>>,
);

impl<P> Retriever<P> {
    pub fn new<F, Fut>(retrieve: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<ModuleMap<P>, CCStr>> + 'static,
    {
        let retrieve: CheapClone<dyn Fn() -> LocalBoxFuture<'static, Result<ModuleMap<P>, CCStr>>> =
            CheapClone::new(move || retrieve().boxed_local());
        Self(retrieve)
    }

    /// Performs one fetch of the module map.
    pub async fn retrieve(&self) -> Result<ModuleMap<P>, CCStr> {
        (self.0)().await
    }

    /// Performs one fetch and extracts the component the export key names.
    ///
    /// An absent export key is reported as an error: the slot stays `Empty`
    /// and the placeholder never clears, it is the caller's responsibility
    /// to name an export the module actually provides.
    pub async fn retrieve_export(&self, export_key: &str) -> Result<SlotComponent<P>, CCStr> {
        let mut module = self.retrieve().await?;
        module.remove(export_key).ok_or_else(|| {
            CCStr::from(format!(
                "export `{export_key}` is not present in the retrieved module"
            ))
        })
    }
}

impl<P> Clone for Retriever<P> {
    fn clone(&self) -> Self {
        Self(CheapClone::clone(&self.0))
    }
}
impl<P> PartialEq for Retriever<P> {
    fn eq(&self, other: &Self) -> bool {
        CheapClone::ptr_eq(&self.0, &other.0)
    }
}
impl<P> core::fmt::Debug for Retriever<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Retriever").finish_non_exhaustive()
    }
}
