//! Build trait definition.

use crate::build::Elaborator;

/// One step of component construction, run inside a context `Cx`.
///
/// Any `FnOnce(&mut Cx) -> T` is a `Build<Cx>` step, so one-off steps
/// are written as closures. The combinator steps in this crate build in
/// every [`BuildContext`](crate::build::BuildContext). `Cx` defaults to
/// [`Elaborator`].
///
/// # Example
///
/// ```rust
/// use rpush::prelude::*;
///
/// let named = |cx: &mut Elaborator| cx.instantiate("probe");
/// assert_eq!(elaborate(named), "top.probe0");
/// ```
pub trait Build<Cx: ?Sized = Elaborator> {
    /// The value this step produces.
    type Output;

    /// Run this step inside `cx`.
    fn build(self, cx: &mut Cx) -> Self::Output;
}

impl<Cx, F, T> Build<Cx> for F
where
    Cx: ?Sized,
    F: FnOnce(&mut Cx) -> T,
{
    type Output = T;

    fn build(self, cx: &mut Cx) -> T {
        self(cx)
    }
}
