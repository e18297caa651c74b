//! Extension trait providing combinator methods for all build steps.

use crate::build::pipe::Pipe;
use crate::build::{Build, Elaborator};

/// Transform the result of a build step.
///
/// Created by [`BuildExt::map`].
pub struct BuildMap<B, F> {
    pub(crate) inner: B,
    pub(crate) f: F,
}

impl<B, F> std::fmt::Debug for BuildMap<B, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuildMap")
            .field("inner", &"<builder>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Cx, B, F, U> Build<Cx> for BuildMap<B, F>
where
    Cx: ?Sized,
    B: Build<Cx>,
    F: FnOnce(B::Output) -> U,
{
    type Output = U;

    fn build(self, cx: &mut Cx) -> U {
        (self.f)(self.inner.build(cx))
    }
}

/// Run a build step inside a named sub-hierarchy.
///
/// Created by [`BuildExt::scoped`].
pub struct Scoped<B> {
    pub(crate) name: String,
    pub(crate) inner: B,
}

impl<B> std::fmt::Debug for Scoped<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scoped")
            .field("name", &self.name)
            .field("inner", &"<builder>")
            .finish()
    }
}

impl<B: Build> Build for Scoped<B> {
    type Output = B::Output;

    fn build(self, cx: &mut Elaborator) -> B::Output {
        cx.scope(self.name, self.inner)
    }
}

/// Extension trait providing combinator methods for [`Build`] steps.
///
/// Automatically implemented for every step that builds in an
/// [`Elaborator`]. The structs it returns build in any context their
/// inner steps do.
///
/// # Example
///
/// ```rust
/// use rpush::prelude::*;
///
/// let chain = elaborate(
///     sink()
///         .and_then(buffer::<u16, _>)
///         .and_then(pass)
///         .scoped("stage"),
/// );
///
/// assert_eq!(chain.name(), "top.stage.pass0");
/// ```
pub trait BuildExt: Build {
    /// Build this step, then the step `f` makes of its result.
    ///
    /// Method form of [`pipe`](crate::build::pipe()).
    fn and_then<F, B>(self, f: F) -> Pipe<F, Self>
    where
        Self: Sized,
        F: FnOnce(Self::Output) -> B,
        B: Build,
    {
        Pipe { f, a: self }
    }

    /// Transform the value this step produces.
    fn map<F, U>(self, f: F) -> BuildMap<Self, F>
    where
        Self: Sized,
        F: FnOnce(Self::Output) -> U,
    {
        BuildMap { inner: self, f }
    }

    /// Build this step inside the named sub-hierarchy.
    fn scoped(self, name: impl Into<String>) -> Scoped<Self>
    where
        Self: Sized,
    {
        Scoped {
            name: name.into(),
            inner: self,
        }
    }
}

impl<B: Build> BuildExt for B {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{built, elaborate};

    #[test]
    fn test_map_transforms_output() {
        assert_eq!(elaborate(built(20).map(|n| n + 1).map(|n| n * 2)), 42);
    }

    #[test]
    fn test_scoped_names_units() {
        let path = elaborate((|cx: &mut Elaborator| cx.instantiate("unit")).scoped("blk"));
        assert_eq!(path, "top.blk.unit0");
    }
}
