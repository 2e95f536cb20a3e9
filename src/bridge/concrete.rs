use alloc::boxed::Box;
use core::any::{Any, type_name};
use core::fmt;
use core::marker::PhantomData;

use tracing::{debug, trace};

use super::CallableBridge;
use crate::error::NotComparableError;
use crate::primitives::Bool;
use crate::signature::{Callable, Signature};
use crate::strategy::{EqualityStrategy, not_comparable};

/// The single implementer of [`CallableBridge`].
///
/// Holds one `F` by value. `C` is the equality flag chosen at construction:
/// [`Present`](crate::Present) compares with `F::eq`, [`Absent`](crate::Absent)
/// defers to the other side and rejects the comparison when that side is
/// `Absent` too.
pub struct ConcreteBridge<F, C> {
    functor: F,
    _flag: PhantomData<fn() -> C>,
}

impl<F, C> ConcreteBridge<F, C> {
    pub fn new(functor: F) -> Self {
        trace!(callable = type_name::<F>(), "bridge allocated");
        Self {
            functor,
            _flag: PhantomData,
        }
    }

    pub fn functor(&self) -> &F {
        &self.functor
    }
}

impl<F, C> Drop for ConcreteBridge<F, C> {
    fn drop(&mut self) {
        trace!(callable = type_name::<F>(), "bridge released");
    }
}

impl<F, C> fmt::Debug for ConcreteBridge<F, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcreteBridge")
            .field("functor", &type_name::<F>())
            .field("flag", &type_name::<C>())
            .finish()
    }
}

impl<S, F, C> CallableBridge<S> for ConcreteBridge<F, C>
where
    S: Signature,
    F: Callable<S> + Clone + 'static,
    C: EqualityStrategy<F>,
{
    fn clone_bridge(&self) -> Box<dyn CallableBridge<S>> {
        trace!(callable = type_name::<F>(), "bridge cloned");
        Box::new(ConcreteBridge::<F, C>::new(self.functor.clone()))
    }

    #[inline]
    fn invoke(&mut self, args: S::Args) -> S::Output {
        self.functor.call_with(args)
    }

    fn equals(&self, other: &dyn CallableBridge<S>) -> Result<bool, NotComparableError> {
        // Step 1: same concrete callable type, or unequal by definition.
        let Some(other_functor) = other.target().downcast_ref::<F>() else {
            return Ok(false);
        };

        // Step 2: one side built with the capability proves `F: PartialEq`.
        if <C as Bool>::VALUE {
            return C::try_equals(&self.functor, other_functor);
        }
        if other.is_comparable() {
            return other.equals(self);
        }
        debug!(callable = type_name::<F>(), "equality rejected");
        Err(not_comparable::<F>())
    }

    fn target(&self) -> &dyn Any {
        &self.functor
    }

    fn is_comparable(&self) -> bool {
        <C as Bool>::VALUE
    }

    fn type_name(&self) -> &'static str {
        type_name::<F>()
    }
}
