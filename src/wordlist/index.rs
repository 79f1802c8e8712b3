use crate::error::Result;

pub trait Index {
    fn add(&mut self, word: &str) -> Result<()>;
    fn contains(&self, word: &str) -> Result<bool>;

    /// Adds every item in order, stopping at the first rejected word.
    fn add_all<'a, I>(&mut self, items: I) -> Result<()>
        where I: IntoIterator<Item = &'a str> {
        items.into_iter().try_for_each(|x| self.add(x))
    }
}
