//! The interface the per-cycle scheduler drives.
//!
//! A [`Component`] owns zero or more guarded rules and some clocked state.
//! The scheduler calls [`fire`](Component::fire) once per cycle, after the
//! cycle's external method calls, and then [`commit`](Component::commit)
//! at the clock edge. Both calls recurse through the ownership tree, so
//! every rule is considered at most once per cycle.

/// A clocked unit with guarded background rules.
///
/// Every [`RPush`](crate::rpush::RPush) is a `Component`. Implement this
/// directly for units with no push interface, such as generators or
/// externally owned queues.
pub trait Component {
    /// Fire every rule owned by this component whose guard holds.
    ///
    /// Returns the number of rules that fired. Guards must read only state
    /// that was visible at the start of the cycle.
    fn fire(&mut self) -> usize;

    /// Clock edge: state written during this cycle becomes visible.
    fn commit(&mut self);
}

impl<C: Component + ?Sized> Component for Box<C> {
    fn fire(&mut self) -> usize {
        (**self).fire()
    }

    fn commit(&mut self) {
        (**self).commit()
    }
}

impl<C: Component> Component for Vec<C> {
    fn fire(&mut self) -> usize {
        self.iter_mut().map(Component::fire).sum()
    }

    fn commit(&mut self) {
        for component in self.iter_mut() {
            component.commit();
        }
    }
}

impl Component for () {
    fn fire(&mut self) -> usize {
        0
    }

    fn commit(&mut self) {}
}

macro_rules! impl_component_tuple {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: Component),+> Component for ($($name,)+) {
            fn fire(&mut self) -> usize {
                0 $(+ self.$idx.fire())+
            }

            fn commit(&mut self) {
                $(self.$idx.commit();)+
            }
        }
    };
}

impl_component_tuple!(A: 0);
impl_component_tuple!(A: 0, B: 1);
impl_component_tuple!(A: 0, B: 1, C: 2);
impl_component_tuple!(A: 0, B: 1, C: 2, D: 3);
