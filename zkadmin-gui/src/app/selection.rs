/// Indices of the checked asset rows, in the order they were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(Vec<usize>);

impl Selection {
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn toggle(&mut self, index: usize) {
        if let Some(pos) = self.0.iter().position(|i| *i == index) {
            self.0.remove(pos);
        } else {
            self.0.push(index);
        }
    }

    /// An empty list counts as fully selected.
    pub fn is_all_selected(&self, count: usize) -> bool {
        self.0.len() == count
    }

    pub fn toggle_all(&mut self, count: usize) {
        if self.is_all_selected(count) {
            self.0.clear();
        } else {
            self.0 = (0..count).collect();
        }
    }
}
