//! Sequencing of build steps.

use crate::build::Build;

/// Build `a`, then build whatever `f` makes of its result.
///
/// Created by [`pipe`] or [`BuildExt::and_then`](crate::build::BuildExt::and_then).
pub struct Pipe<F, A> {
    pub(crate) f: F,
    pub(crate) a: A,
}

impl<F, A> std::fmt::Debug for Pipe<F, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipe")
            .field("f", &"<function>")
            .field("a", &"<builder>")
            .finish()
    }
}

impl<Cx, F, A, B> Build<Cx> for Pipe<F, A>
where
    Cx: ?Sized,
    A: Build<Cx>,
    F: FnOnce(A::Output) -> B,
    B: Build<Cx>,
{
    type Output = B::Output;

    fn build(self, cx: &mut Cx) -> Self::Output {
        let inner = self.a.build(cx);
        (self.f)(inner).build(cx)
    }
}

/// Wrap the result of build step `a` with the builder `f`.
///
/// `a` is built first. Its result is handed to `f`, and the step `f` returns
/// is built in the same context. Nothing else happens.
///
/// # Example
///
/// ```rust
/// use rpush::prelude::*;
///
/// // pass ∘ apply, without naming the intermediate stage
/// let chain = elaborate(pipe(|dst| pass(apply(|x: u32| x + 1, dst)), sink()));
/// assert_eq!(chain.name(), "top.pass0");
/// ```
pub fn pipe<F, A>(f: F, a: A) -> Pipe<F, A> {
    Pipe { f, a }
}

/// A build step that returns an already constructed value.
///
/// Created by [`built`].
#[derive(Debug, Clone)]
pub struct Built<T>(pub T);

impl<Cx: ?Sized, T> Build<Cx> for Built<T> {
    type Output = T;

    fn build(self, _cx: &mut Cx) -> T {
        self.0
    }
}

/// Lift a constructed value into a build step.
///
/// # Example
///
/// ```rust
/// use rpush::prelude::*;
///
/// let probe = Probe::<u8>::new(&Clock::new());
/// let chain = elaborate(pipe(pass, built(probe)));
/// assert_eq!(chain.name(), "top.pass0");
/// ```
pub fn built<T>(value: T) -> Built<T> {
    Built(value)
}
