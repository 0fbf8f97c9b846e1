use crate::extremum::triple::SampleTriple;

pub trait IterationObserver {
    /// called once with iteration 0 for the initial triple,
    /// then once per completed iteration, in order
    fn observe(&mut self, iteration: usize, triple: &SampleTriple);
}

impl<F> IterationObserver for F
where F: FnMut(usize, &SampleTriple) {
    #[inline]
    fn observe(&mut self, iteration: usize, triple: &SampleTriple) {
        self(iteration, triple)
    }
}


/// Observer that ignores every iterate.
#[derive(Debug, Default, Copy, Clone)]
pub struct Silent;

impl IterationObserver for Silent {
    #[inline]
    fn observe(&mut self, _iteration: usize, _triple: &SampleTriple) {}
}


/// Observer that records every snapshot it receives.
#[derive(Debug, Default, Clone)]
pub struct History {
    pub snapshots: Vec<(usize, SampleTriple)>,
}

impl History {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.snapshots.len() }

    pub fn is_empty(&self) -> bool { self.snapshots.is_empty() }

    pub fn last(&self) -> Option<&SampleTriple> {
        self.snapshots.last().map(|(_, t)| t)
    }
}

impl IterationObserver for History {
    fn observe(&mut self, iteration: usize, triple: &SampleTriple) {
        self.snapshots.push((iteration, *triple));
    }
}
