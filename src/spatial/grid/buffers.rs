use super::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl MatterGrid {
    // === Buffer roles ===
    #[inline]
    pub fn input(&self) -> &[Matter] {
        if self.a_is_input { &self.buffer_a } else { &self.buffer_b }
    }

    #[inline]
    pub fn output(&self) -> &[Matter] {
        if self.a_is_input { &self.buffer_b } else { &self.buffer_a }
    }

    /// Direct edits of the input buffer (brush). Never used while a phase runs.
    #[inline]
    pub fn input_mut(&mut self) -> &mut [Matter] {
        if self.a_is_input { &mut self.buffer_a } else { &mut self.buffer_b }
    }

    /// Borrow input (shared) and output (exclusive) for one dispatch
    #[inline]
    pub fn phase(&mut self) -> (GridView<'_>, &mut [Matter]) {
        let (input, output) = if self.a_is_input {
            (&self.buffer_a, &mut self.buffer_b)
        } else {
            (&self.buffer_b, &mut self.buffer_a)
        };
        (GridView::new(input, self.width, self.height, self.empty), output)
    }

    #[inline]
    pub fn view(&self) -> GridView<'_> {
        GridView::new(self.input(), self.width, self.height, self.empty)
    }

    /// Exchange input/output roles after a dispatch
    #[inline]
    pub fn swap(&mut self) {
        self.a_is_input = !self.a_is_input;
    }

    // === Cell access ===
    #[inline]
    pub fn read(&self, x: u32, y: u32) -> Matter {
        self.input()[self.index(x, y)]
    }

    #[inline]
    pub fn write(&mut self, x: u32, y: u32, matter: Matter) {
        let idx = self.index(x, y);
        if self.a_is_input {
            self.buffer_b[idx] = matter;
        } else {
            self.buffer_a[idx] = matter;
        }
    }

    /// Reset both buffers to the empty value
    pub fn clear(&mut self) {
        let empty = self.empty;
        self.buffer_a.fill(empty);
        self.buffer_b.fill(empty);
    }

    /// Non-empty cells in the input buffer
    /// PARALLEL: Rayon reduction when feature enabled
    pub fn count_non_empty(&self) -> usize {
        #[cfg(feature = "parallel")]
        {
            self.input().par_iter().filter(|m| !m.is_empty()).count()
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.input().iter().filter(|m| !m.is_empty()).count()
        }
    }
}
