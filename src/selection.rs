use crate::util::mod12::sub_mod12;

/// A set of pitch classes, owned by whoever collects the user's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    active: [bool; 12],
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// returns true iff `pc` was not already selected
    pub fn insert(&mut self, pc: u8) -> bool {
        let slot = &mut self.active[(pc % 12) as usize];
        let changed = !*slot;
        *slot = true;
        changed
    }

    /// returns true iff `pc` was selected
    pub fn remove(&mut self, pc: u8) -> bool {
        let slot = &mut self.active[(pc % 12) as usize];
        let changed = *slot;
        *slot = false;
        changed
    }

    /// Flips membership of `pc` and returns whether it is selected afterwards.
    pub fn toggle(&mut self, pc: u8) -> bool {
        let slot = &mut self.active[(pc % 12) as usize];
        *slot = !*slot;
        *slot
    }

    pub fn clear(&mut self) {
        self.active = [false; 12];
    }

    pub fn contains(&self, pc: u8) -> bool {
        self.active[(pc % 12) as usize]
    }

    pub fn len(&self) -> usize {
        self.active.iter().filter(|&&a| a).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.active.iter().any(|&a| a)
    }

    /// The selected pitch classes, ascending.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..12u8).filter(|&pc| self.active[pc as usize])
    }

    /// Intervals of the selected pitch classes above `root`, ascending.
    pub fn relative_to(&self, root: u8) -> Vec<u8> {
        let mut res: Vec<u8> = self.iter().map(|pc| sub_mod12(pc, root)).collect();
        res.sort_unstable();
        res
    }
}

impl FromIterator<u8> for Selection {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut res = Self::new();
        for pc in iter {
            res.insert(pc);
        }
        res
    }
}
