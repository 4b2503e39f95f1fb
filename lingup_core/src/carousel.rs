//! Looping carousel position and page building.

/// Current slide of a looping carousel with `len` slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Advance, wrapping from the last slide to the first.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Step back, wrapping from the first slide to the last.
    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to a dot. Out-of-range targets clamp to the last slide.
    pub fn go_to(&mut self, index: usize) {
        self.index = index.min(self.len.saturating_sub(1));
    }
}

/// Repeat `items` from the start to exactly `len` entries, then split into
/// pages of `page_size`.
pub fn paginate<T: Clone>(items: &[T], page_size: usize, len: usize) -> Vec<Vec<T>> {
    if items.is_empty() || page_size == 0 {
        return Vec::new();
    }
    let padded: Vec<T> = items.iter().cycle().take(len).cloned().collect();
    padded.chunks(page_size).map(<[T]>::to_vec).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_ways() {
        let mut carousel = Carousel::new(3);
        carousel.prev();
        assert_eq!(carousel.index(), 2);
        carousel.next();
        assert_eq!(carousel.index(), 0);
        carousel.next();
        carousel.next();
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn go_to_clamps() {
        let mut carousel = Carousel::new(4);
        carousel.go_to(2);
        assert_eq!(carousel.index(), 2);
        carousel.go_to(10);
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.prev();
        carousel.go_to(5);
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_empty());
    }

    #[test]
    fn eleven_reviews_become_two_pages_of_six() {
        let reviews: Vec<u32> = (1..=11).collect();
        let pages = paginate(&reviews, 6, 12);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0], vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(pages[1], vec![7, 8, 9, 10, 11, 1]);
    }

    #[test]
    fn short_lists_are_repeated() {
        let pages = paginate(&["a", "b"], 6, 12);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1], vec!["a", "b", "a", "b", "a", "b"]);
        assert!(paginate::<u8>(&[], 6, 12).is_empty());
    }

    #[test]
    fn long_lists_are_cut() {
        let many: Vec<u32> = (0..20).collect();
        let pages = paginate(&many, 6, 12);
        assert_eq!(pages.iter().map(Vec::len).sum::<usize>(), 12);
    }
}
