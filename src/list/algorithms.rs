use crate::error::{ListError, Result};
use crate::list::{List, Node};
use std::hash::{Hash, Hasher};
use std::ptr::NonNull;
use tracing::{debug, trace};

/// Compares the elements only; the read-only flag is not part of the value.
impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

/// Clones the elements and the read-only flag.
impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        let mut list: List<T> = self.iter().cloned().collect();
        list.read_only = self.read_only;
        list
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T> List<T> {
    /// Find the first node whose element equals `x`, with its index.
    ///
    /// Every node is examined, the last one included.
    fn find_node(&self, x: &T) -> Option<(usize, NonNull<Node<T>>)>
    where
        T: PartialEq<T>,
    {
        let mut current = self.front_node();
        let mut index = 0;
        while let Some(node) = current {
            // SAFETY: `node` is reachable from `head`, so it is a node of the list.
            let node_ref = unsafe { node.as_ref() };
            if node_ref.element == *x {
                return Some((index, node));
            }
            current = node_ref.next;
            index += 1;
        }
        None
    }

    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([0, 1, 2]);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Returns the index of the first element equal to the given value, or
    /// `None` if there is no such element.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter(["a", "b", "a"]);
    /// assert_eq!(list.index_of(&"a"), Some(0));
    /// assert_eq!(list.index_of(&"b"), Some(1));
    /// assert_eq!(list.index_of(&"c"), None);
    /// ```
    pub fn index_of(&self, x: &T) -> Option<usize>
    where
        T: PartialEq<T>,
    {
        self.find_node(x).map(|(index, _)| index)
    }

    /// Removes the first element equal to the given value. Returns whether an
    /// element was removed.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Errors
    ///
    /// [`ListError::ReadOnlyViolation`] if the list is read-only, whether or
    /// not the value is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 1, 3]);
    /// assert_eq!(list.remove_item(&1), Ok(true));
    /// assert_eq!(list.remove_item(&3), Ok(true));
    /// assert_eq!(list.remove_item(&4), Ok(false));
    /// assert_eq!(list.to_vec(), vec![2, 1]);
    /// ```
    pub fn remove_item(&mut self, x: &T) -> Result<bool>
    where
        T: PartialEq<T>,
    {
        self.ensure_writable("remove_item")?;
        match self.find_node(x) {
            Some((index, node)) => {
                // SAFETY: `node` was found by walking the list.
                drop(unsafe { self.detach_node(node) });
                trace!(index, len = self.len, "removed matching element");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Clones the elements into `dest`, starting at `dest[start]`. The list is
    /// always read from its first element.
    ///
    /// Nothing is written unless `dest` can hold `start + len` elements.
    ///
    /// # Errors
    ///
    /// [`ListError::OutOfBounds`] if `dest.len() < start + len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::{List, ListError};
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    ///
    /// let mut dest = [0; 5];
    /// list.copy_to(&mut dest, 1)?;
    /// assert_eq!(dest, [0, 1, 2, 3, 0]);
    ///
    /// assert_eq!(
    ///     list.copy_to(&mut dest, 3),
    ///     Err(ListError::OutOfBounds { required: 6, capacity: 5 })
    /// );
    /// # Ok::<(), ListError>(())
    /// ```
    pub fn copy_to(&self, dest: &mut [T], start: usize) -> Result<()>
    where
        T: Clone,
    {
        let required = start.saturating_add(self.len());
        if dest.len() < required {
            debug!(
                required,
                capacity = dest.len(),
                "rejected: destination too small"
            );
            return Err(ListError::OutOfBounds {
                required,
                capacity: dest.len(),
            });
        }
        dest[start..required]
            .iter_mut()
            .zip(self.iter())
            .for_each(|(slot, elt)| slot.clone_from(elt));
        Ok(())
    }

    /// Clones the elements into a new `Vec`, in list order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}
