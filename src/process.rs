//! Process abstraction.
//! `ChainedProcess` is monomorphised: the concrete type of every stage is
//! known and each `needs_apply`/`apply` pair inlines into the caller.
//! `DynamicProcess` is the runtime-assembled fallback.
use crate::stage::Stage;
use smallvec::SmallVec;
use std::{borrow::Cow, sync::Arc};

pub trait Process: Send + Sync {
    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;
}

pub struct EmptyProcess;

impl Process for EmptyProcess {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        text
    }
}

pub struct ChainedProcess<S: Stage, P: Process> {
    pub stage: S,
    pub previous: P,
}

impl<S: Stage, P: Process> Process for ChainedProcess<S, P> {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let current = self.previous.process(text);
        if !self.stage.needs_apply(&current) {
            return current;
        }
        self.stage.apply(current)
    }
}

#[derive(Default)]
pub struct DynamicProcess {
    pub(crate) stages: SmallVec<[Arc<dyn Stage>; 4]>,
}

impl DynamicProcess {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Process for DynamicProcess {
    fn process<'a>(&self, mut text: Cow<'a, str>) -> Cow<'a, str> {
        for stage in &self.stages {
            if !stage.needs_apply(&text) {
                continue;
            }
            tracing::trace!(stage = stage.name(), "applying stage");
            text = stage.apply(text);
        }
        text
    }
}
