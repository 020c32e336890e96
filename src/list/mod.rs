use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::ptr::NonNull;

use tracing::{debug, trace};

use crate::error::{ListError, Result};
use crate::{IntoIter, Iter};

pub mod iterator;

mod algorithms;

/// The `List` is a doubly-linked sequence container with owned nodes.
/// It supports indexed access, insertion and removal at any position in
/// *O*(*n*) time, and appending in *O*(1) time.
///
/// A list may be constructed read-only (see [`List::with_read_only`]). The
/// flag is fixed for the lifetime of the list; a read-only list rejects every
/// mutation, and also rejects indexed access ([`List::get`]) with
/// [`ListError::ReadOnlyViolation`].
///
/// The `List` contains:
/// - `head` and `tail`, pointing to the first and the last node, both `None`
///   if and only if the list is empty;
/// - a length field `len`, always equal to the number of linked nodes;
/// - the `read_only` flag.
pub struct List<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    read_only: bool,
    _marker: PhantomData<Box<Node<T>>>,
}

pub(crate) struct Node<T> {
    pub(crate) next: Option<NonNull<Node<T>>>,
    pub(crate) prev: Option<NonNull<Node<T>>>,
    pub(crate) element: T,
}

// private methods
impl<T> List<T> {
    pub(crate) fn front_node(&self) -> Option<NonNull<Node<T>>> {
        self.head
    }
    pub(crate) fn back_node(&self) -> Option<NonNull<Node<T>>> {
        self.tail
    }

    /// Fails with [`ListError::ReadOnlyViolation`] if the list is read-only.
    fn ensure_writable(&self, op: &'static str) -> Result<()> {
        if self.read_only {
            debug!(op, len = self.len, "rejected: list is read only");
            return Err(ListError::ReadOnlyViolation);
        }
        Ok(())
    }

    fn out_of_range(&self, op: &'static str, index: usize) -> ListError {
        debug!(op, index, len = self.len, "rejected: index out of range");
        ListError::IndexOutOfRange {
            index,
            len: self.len,
        }
    }

    /// Find the node at index `at`, or `None` if `at >= len`.
    ///
    /// The walk starts from whichever end of the list is nearer.
    ///
    /// This operation should compute in *O*(*n*) time.
    fn seek(&self, at: usize) -> Option<NonNull<Node<T>>> {
        if at >= self.len {
            return None;
        }
        // SAFETY: every node reachable from `head` or `tail` is owned by the
        // list, and `at < len` keeps the walk within the linked nodes.
        unsafe {
            if at <= self.len / 2 {
                // [  -->t       ]
                let mut node = self.head?;
                for _ in 0..at {
                    node = node.as_ref().next?;
                }
                Some(node)
            } else {
                // [       t<--  ]
                let mut node = self.tail?;
                for _ in at + 1..self.len {
                    node = node.as_ref().prev?;
                }
                Some(node)
            }
        }
    }

    /// Like [`List::seek`], but reports an out-of-range index as an error.
    fn locate(&self, op: &'static str, at: usize) -> Result<NonNull<Node<T>>> {
        self.seek(at).ok_or_else(|| self.out_of_range(op, at))
    }

    /// Attach a new node holding `element` right before `next`, or at the back
    /// of the list if `next` is `None`.
    ///
    /// It is unsafe because it does not check whether `next` belongs to the
    /// list. If it does not, this function call will make the list ill-formed.
    unsafe fn attach_before(&mut self, next: Option<NonNull<Node<T>>>, element: T) {
        let prev = match next {
            Some(next) => next.as_ref().prev,
            None => self.tail,
        };
        let node = Node::new_detached(prev, next, element);
        match prev {
            Some(mut prev) => prev.as_mut().next = Some(node),
            None => self.head = Some(node),
        }
        match next {
            Some(mut next) => next.as_mut().prev = Some(node),
            None => self.tail = Some(node),
        }
        self.len += 1;
    }

    /// Detach a single node `node` from the list, and return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the list.
    ///
    /// If the `node` does not belong to the list, this function call will make
    /// the list ill-formed.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        let node = Box::from_raw(node.as_ptr());
        match node.prev {
            Some(mut prev) => prev.as_mut().next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(mut next) => next.as_mut().prev = node.prev,
            None => self.tail = node.prev,
        }
        self.len -= 1;
        node
    }

    pub(crate) fn link_back(&mut self, element: T) {
        // SAFETY: `None` always denotes the back of the list.
        unsafe { self.attach_before(None, element) }
    }

    /// Remove the first element without checking the read-only flag.
    pub(crate) fn take_front(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: `head` is a node of the list.
        Some(unsafe { self.detach_node(head) }.into_element())
    }

    /// Remove the last element without checking the read-only flag.
    pub(crate) fn take_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        // SAFETY: `tail` is a node of the list.
        Some(unsafe { self.detach_node(tail) }.into_element())
    }

    fn release_nodes(&mut self) {
        while self.take_front().is_some() {}
    }

    fn element_mut(&mut self, op: &'static str, at: usize) -> Result<&mut T> {
        self.ensure_writable(op)?;
        let mut node = self.locate(op, at)?;
        // SAFETY: `node` is a node of the list, and the returned reference
        // borrows the list mutably.
        Ok(unsafe { &mut node.as_mut().element })
    }
}

impl<T> List<T> {
    /// Create an empty, writable `List`.
    ///
    /// # Examples
    /// ```
    /// use seq_list::List;
    /// let list: List<u32> = List::new();
    /// assert!(!list.is_read_only());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_read_only(false)
    }

    /// Create an empty `List`, read-only if `read_only` is `true`.
    ///
    /// The flag cannot be changed afterwards.
    ///
    /// # Examples
    /// ```
    /// use seq_list::{List, ListError};
    ///
    /// let mut list = List::with_read_only(true);
    /// assert_eq!(list.push_back(1), Err(ListError::ReadOnlyViolation));
    /// assert!(list.is_empty());
    /// ```
    pub fn with_read_only(read_only: bool) -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            read_only,
            _marker: PhantomData,
        }
    }

    /// Create a read-only `List` holding the items of `iter` in order.
    ///
    /// # Examples
    /// ```
    /// use seq_list::{List, ListError};
    ///
    /// let mut list = List::read_only_from(["a", "b"]);
    /// assert_eq!(list.len(), 2);
    /// assert!(list.contains(&"b"));
    /// assert_eq!(list.remove(0), Err(ListError::ReadOnlyViolation));
    /// ```
    pub fn read_only_from<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list: List<T> = iter.into_iter().collect();
        list.read_only = true;
        list
    }

    /// Returns `true` if the `List` was constructed read-only.
    #[inline]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_back("foo").unwrap();
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of elements in the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(2).unwrap();
    /// assert_eq!(list.len(), 1);
    ///
    /// list.insert(0, 1).unwrap();
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Errors
    ///
    /// [`ListError::ReadOnlyViolation`] if the list is read-only.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2]);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.clear().unwrap();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    pub fn clear(&mut self) -> Result<()> {
        self.ensure_writable("clear")?;
        let len = self.len;
        self.release_nodes();
        trace!(released = len, "cleared list");
        Ok(())
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        // SAFETY: `head` is a node of the list.
        self.head.map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        // SAFETY: `tail` is a node of the list.
        self.tail.map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Appends an element to the back of a list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Errors
    ///
    /// [`ListError::ReadOnlyViolation`] if the list is read-only.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1)?;
    /// list.push_back(3)?;
    /// assert_eq!(list.back(), Some(&3));
    /// # Ok::<(), seq_list::ListError>(())
    /// ```
    pub fn push_back(&mut self, elt: T) -> Result<()> {
        self.ensure_writable("push_back")?;
        self.link_back(elt);
        trace!(len = self.len, "appended element");
        Ok(())
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Errors
    ///
    /// [`ListError::ReadOnlyViolation`] if the list is read-only.
    pub fn pop_front(&mut self) -> Result<Option<T>> {
        self.ensure_writable("pop_front")?;
        Ok(self.take_front())
    }

    /// Removes the last element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Errors
    ///
    /// [`ListError::ReadOnlyViolation`] if the list is read-only.
    pub fn pop_back(&mut self) -> Result<Option<T>> {
        self.ensure_writable("pop_back")?;
        Ok(self.take_back())
    }

    /// Adds an element at the given index in the list, shifting the elements
    /// after it towards the back. Inserting at `len` appends.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Errors
    ///
    /// - [`ListError::ReadOnlyViolation`] if the list is read-only;
    /// - [`ListError::IndexOutOfRange`] if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::{List, ListError};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// list.insert(2, 4)?;
    /// list.insert(4, 5)?;
    /// assert_eq!(list.to_vec(), vec![1, 2, 4, 3, 5]);
    ///
    /// assert_eq!(
    ///     list.insert(6, 6),
    ///     Err(ListError::IndexOutOfRange { index: 6, len: 5 })
    /// );
    /// # Ok::<(), ListError>(())
    /// ```
    pub fn insert(&mut self, at: usize, elt: T) -> Result<()> {
        self.ensure_writable("insert")?;
        if at > self.len {
            return Err(self.out_of_range("insert", at));
        }
        let next = self.seek(at);
        // SAFETY: `next` is either a node of the list or `None` (the back).
        unsafe { self.attach_before(next, elt) };
        trace!(index = at, len = self.len, "inserted element");
        Ok(())
    }

    /// Removes the element at the given index and returns it.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Errors
    ///
    /// - [`ListError::ReadOnlyViolation`] if the list is read-only;
    /// - [`ListError::IndexOutOfRange`] if `at >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([3, 2, 1]);
    ///
    /// assert_eq!(list.remove(1), Ok(2));
    /// assert_eq!(list.remove(1), Ok(1));
    /// assert_eq!(list.remove(0), Ok(3));
    /// assert!(list.remove(0).is_err());
    /// ```
    pub fn remove(&mut self, at: usize) -> Result<T> {
        self.ensure_writable("remove")?;
        let node = self.locate("remove", at)?;
        // SAFETY: `node` is a node of the list.
        let elt = unsafe { self.detach_node(node) }.into_element();
        trace!(index = at, len = self.len, "removed element");
        Ok(elt)
    }

    /// Provides a reference to the element at the given index.
    ///
    /// Read-only lists are inert to indexed access: this fails on them even
    /// though it does not mutate anything. Use [`List::iter`], [`List::front`]
    /// or [`List::back`] to read a read-only list.
    ///
    /// # Errors
    ///
    /// - [`ListError::ReadOnlyViolation`] if the list is read-only;
    /// - [`ListError::IndexOutOfRange`] if `at >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::{List, ListError};
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter(["a", "b", "c"]);
    /// assert_eq!(list.get(1), Ok(&"b"));
    /// assert_eq!(list.get(3), Err(ListError::IndexOutOfRange { index: 3, len: 3 }));
    ///
    /// let sealed = List::read_only_from(["a"]);
    /// assert_eq!(sealed.get(0), Err(ListError::ReadOnlyViolation));
    /// ```
    pub fn get(&self, at: usize) -> Result<&T> {
        // read-only lists are inert to indexed reads too
        self.ensure_writable("get")?;
        let node = self.locate("get", at)?;
        // SAFETY: `node` is a node of the list, and the returned reference
        // borrows the list.
        Ok(unsafe { &(*node.as_ptr()).element })
    }

    /// Provides a mutable reference to the element at the given index.
    ///
    /// Fails the same way as [`List::get`].
    pub fn get_mut(&mut self, at: usize) -> Result<&mut T> {
        self.element_mut("get_mut", at)
    }

    /// Replaces the element at the given index, returning the old one.
    ///
    /// # Errors
    ///
    /// - [`ListError::ReadOnlyViolation`] if the list is read-only;
    /// - [`ListError::IndexOutOfRange`] if `at >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.set(1, 5), Ok(2));
    /// assert_eq!(list.to_vec(), vec![1, 5, 3]);
    /// ```
    pub fn set(&mut self, at: usize, elt: T) -> Result<T> {
        let slot = self.element_mut("set", at)?;
        Ok(std::mem::replace(slot, elt))
    }

    /// Provides a forward iterator.
    ///
    /// Every call starts a fresh walk from the first element. The iterator
    /// borrows the list, so the list cannot be mutated while it is alive:
    ///
    /// ```compile_fail
    /// use seq_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut iter = list.iter();
    ///
    /// // Won't compile, because list is already borrowed immutably.
    /// list.push_back(4).unwrap();
    /// println!("{:?}", iter.next());
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([0, 1, 2]);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

impl<T> Index<usize> for List<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics whenever [`List::get`] would fail.
    fn index(&self, at: usize) -> &T {
        match self.get(at) {
            Ok(elt) => elt,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<usize> for List<T> {
    /// # Panics
    ///
    /// Panics whenever [`List::get_mut`] would fail.
    fn index_mut(&mut self, at: usize) -> &mut T {
        match self.get_mut(at) {
            Ok(elt) => elt,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a node with given links and element, leaked from a box. The
    /// caller takes over its ownership.
    fn new_detached(
        prev: Option<NonNull<Node<T>>>,
        next: Option<NonNull<Node<T>>>,
        element: T,
    ) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next,
            prev,
            element,
        })))
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.release_nodes();
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ListError;
    use crate::list::List;
    use std::cell::RefCell;
    use std::fmt::Debug;
    use std::iter::FromIterator;

    fn list_eq<T, I>(list: &List<T>, expected: I)
    where
        T: Debug + Clone + Eq,
        I: IntoIterator<Item = T>,
    {
        assert_eq!(
            Vec::from_iter(list.iter().cloned()),
            Vec::from_iter(expected)
        );
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        assert!(!list.is_read_only());
        list.push_back(1).unwrap();
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Ok(Some(1)));
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &dropped)).unwrap();
        list.push_back(DropChecker::new(2, &dropped)).unwrap();
        list.push_back(DropChecker::new(3, &dropped)).unwrap();
        drop(list.remove(1));
        assert_eq!(dropped.borrow().as_slice(), &[2]);
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[2, 1, 3]);

        // read-only lists still release their nodes
        let dropped = RefCell::new(Vec::<i32>::new());
        let list = List::read_only_from(vec![
            DropChecker::new(4, &dropped),
            DropChecker::new(5, &dropped),
        ]);
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[4, 5]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert_eq!(list.len(), 0);
        assert_eq!(list.pop_front(), Ok(None));
        assert_eq!(list.pop_back(), Ok(None));

        list.push_back(1).unwrap();
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.pop_front(), Ok(Some(1)));
        assert!(list.is_empty());

        list.push_back(1).unwrap();
        list.push_back(2).unwrap();
        list.push_back(3).unwrap();
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.pop_back(), Ok(Some(3)));
        assert_eq!(list.pop_front(), Ok(Some(1)));
        assert_eq!(list.len(), 1);
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.back(), Some(&2));
    }

    #[test]
    fn list_insert_and_remove() {
        let mut list = List::from_iter(0..10);
        list.insert(5, 10).unwrap();
        list_eq(&list, (0..5).chain(Some(10)).chain(5..10));

        assert_eq!(list.remove(10), Ok(9));
        assert_eq!(list.back(), Some(&8));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9));

        list.insert(0, 11).unwrap();
        assert_eq!(list.front(), Some(&11));
        list_eq(&list, (11..=11).chain((0..5).chain(Some(10)).chain(5..9)));

        assert_eq!(list.remove(0), Ok(11));
        assert_eq!(list.front(), Some(&0));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9));

        list.insert(10, 12).unwrap();
        assert_eq!(list.back(), Some(&12));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9).chain(Some(12)));
        assert_eq!(list.len(), 11);
    }

    #[test]
    fn list_insert_into_empty() {
        let mut list = List::new();
        list.insert(0, "a").unwrap();
        assert_eq!(list.front(), Some(&"a"));
        assert_eq!(list.back(), Some(&"a"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn list_index_bounds() {
        let mut list = List::from_iter(0..3);
        let out_of_range = |index| ListError::IndexOutOfRange { index, len: 3 };

        assert_eq!(list.insert(4, 9), Err(out_of_range(4)));
        assert_eq!(list.remove(3), Err(out_of_range(3)));
        assert_eq!(list.get(3), Err(out_of_range(3)));
        assert_eq!(list.get_mut(3), Err(out_of_range(3)));
        assert_eq!(list.set(3, 9), Err(out_of_range(3)));
        list_eq(&list, 0..3);

        list.insert(3, 3).unwrap();
        list_eq(&list, 0..4);
        assert_eq!(list.get(3), Ok(&3));
    }

    #[test]
    fn list_remove_last() {
        let mut list = List::from_iter(0..4);
        assert_eq!(list.remove(3), Ok(3));
        assert_eq!(list.len(), 3);
        assert_eq!(list.back(), Some(&2));

        assert_eq!(list.remove_item(&2), Ok(true));
        assert_eq!(list.len(), 2);
        assert_eq!(list.back(), Some(&1));
        list_eq(&list, 0..2);

        assert_eq!(list.remove(1), Ok(1));
        assert_eq!(list.remove(0), Ok(0));
        assert!(list.is_empty());
        assert_eq!(list.back(), None);
    }

    #[test]
    fn list_get_and_set() {
        let mut list = List::from_iter(0..7);
        for i in 0..7 {
            assert_eq!(list.get(i), Ok(&i));
            assert_eq!(list[i], i);
        }
        *list.get_mut(5).unwrap() = 50;
        list[1] = 10;
        assert_eq!(list.set(6, 60), Ok(6));
        list_eq(&list, vec![0, 10, 2, 3, 4, 50, 60]);
    }

    #[test]
    #[should_panic(expected = "index 2 is out of range for a list of length 2")]
    fn list_index_panics() {
        let list = List::from_iter(0..2);
        let _value = list[2];
    }

    #[test]
    #[should_panic(expected = "list is read only")]
    fn list_index_read_only_panics() {
        let list = List::read_only_from(0..2);
        let _value = list[0];
    }

    #[test]
    fn list_read_only() {
        let mut list = List::read_only_from(0..3);
        assert!(list.is_read_only());

        assert_eq!(list.push_back(3), Err(ListError::ReadOnlyViolation));
        assert_eq!(list.clear(), Err(ListError::ReadOnlyViolation));
        assert_eq!(list.remove_item(&1), Err(ListError::ReadOnlyViolation));
        assert_eq!(list.remove_item(&7), Err(ListError::ReadOnlyViolation));
        assert_eq!(list.insert(0, 3), Err(ListError::ReadOnlyViolation));
        assert_eq!(list.remove(0), Err(ListError::ReadOnlyViolation));
        assert_eq!(list.pop_front(), Err(ListError::ReadOnlyViolation));
        assert_eq!(list.pop_back(), Err(ListError::ReadOnlyViolation));
        assert_eq!(list.set(0, 3), Err(ListError::ReadOnlyViolation));
        assert_eq!(list.get_mut(0), Err(ListError::ReadOnlyViolation));
        assert_eq!(list.get(0), Err(ListError::ReadOnlyViolation));

        // read-only takes precedence over bounds
        assert_eq!(list.get(10), Err(ListError::ReadOnlyViolation));
        assert_eq!(list.insert(10, 3), Err(ListError::ReadOnlyViolation));

        assert_eq!(list.len(), 3);
        list_eq(&list, 0..3);
        assert!(list.contains(&2));
        assert_eq!(list.index_of(&2), Some(2));
        assert_eq!(list.front(), Some(&0));
        assert_eq!(list.back(), Some(&2));
    }

    #[test]
    fn list_empty_read_only() {
        let mut list = List::<i32>::with_read_only(true);
        assert!(list.is_read_only());
        assert_eq!(list.push_back(1), Err(ListError::ReadOnlyViolation));
        assert_eq!(list.clear(), Err(ListError::ReadOnlyViolation));
        assert!(list.is_empty());
        assert_eq!(list.iter().next(), None);
    }

    #[test]
    fn list_clear() {
        let mut list = List::from_iter(0..5);
        list.clear().unwrap();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(list.iter().next(), None);

        list.push_back(7).unwrap();
        list_eq(&list, Some(7));
    }

    #[test]
    fn list_debug() {
        let list = List::from_iter(["a", "b"]);
        assert_eq!(format!("{:?}", list), r#"["a", "b"]"#);
    }
}

// proptest doesn't run under miri with default config
#[cfg(all(not(miri), test))]
mod proptests {
    use crate::list::List;
    use proptest::prelude::*;
    use std::iter::FromIterator;

    #[derive(Clone, Debug)]
    enum Op {
        PushBack(u8),
        Insert(usize, u8),
        Remove(usize),
        RemoveItem(u8),
        Set(usize, u8),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            2 => any::<u8>().prop_map(Op::PushBack),
            2 => (0..40usize, any::<u8>()).prop_map(|(at, x)| Op::Insert(at, x)),
            1 => (0..40usize).prop_map(Op::Remove),
            1 => (0..16u8).prop_map(Op::RemoveItem),
            1 => (0..40usize, any::<u8>()).prop_map(|(at, x)| Op::Set(at, x)),
        ]
    }

    proptest! {
        #[test]
        fn push_back_preserves_order(items in prop::collection::vec(any::<i32>(), 0..64)) {
            let mut list = List::new();
            for item in &items {
                list.push_back(*item).unwrap();
            }
            prop_assert_eq!(list.len(), items.len());
            prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), items.clone());
            prop_assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(),
                items.iter().rev().copied().collect::<Vec<_>>());
        }

        #[test]
        fn matches_vec_model(ops in prop::collection::vec(op(), 0..128)) {
            let mut list = List::new();
            let mut model: Vec<u8> = Vec::new();
            for op in ops {
                match op {
                    Op::PushBack(x) => {
                        list.push_back(x).unwrap();
                        model.push(x);
                    }
                    Op::Insert(at, x) => {
                        let result = list.insert(at, x);
                        prop_assert_eq!(result.is_ok(), at <= model.len());
                        if at <= model.len() {
                            model.insert(at, x);
                        }
                    }
                    Op::Remove(at) => {
                        let result = list.remove(at);
                        if at < model.len() {
                            prop_assert_eq!(result, Ok(model.remove(at)));
                        } else {
                            prop_assert!(result.is_err());
                        }
                    }
                    Op::RemoveItem(x) => {
                        let position = model.iter().position(|e| *e == x);
                        prop_assert_eq!(list.remove_item(&x), Ok(position.is_some()));
                        if let Some(at) = position {
                            model.remove(at);
                        }
                    }
                    Op::Set(at, x) => {
                        let result = list.set(at, x);
                        if at < model.len() {
                            prop_assert_eq!(result, Ok(std::mem::replace(&mut model[at], x)));
                        } else {
                            prop_assert!(result.is_err());
                        }
                    }
                }
                prop_assert_eq!(list.len(), model.len());
                prop_assert_eq!(list.iter().count(), model.len());
            }
            prop_assert_eq!(list.to_vec(), model);
        }

        #[test]
        fn copy_to_round_trip(items in prop::collection::vec(any::<i64>(), 0..64), start in 0..8usize) {
            let list = List::from_iter(items.clone());
            let mut dest = vec![0; start + items.len()];
            list.copy_to(&mut dest, start).unwrap();
            prop_assert_eq!(&dest[start..], items.as_slice());
            prop_assert!(dest[..start].iter().all(|x| *x == 0));
        }

        #[test]
        fn read_only_is_inert(items in prop::collection::vec(any::<u8>(), 0..16), at in 0..20usize, x in any::<u8>()) {
            let mut list = List::read_only_from(items.clone());
            prop_assert!(list.push_back(x).is_err());
            prop_assert!(list.insert(at, x).is_err());
            prop_assert!(list.remove(at).is_err());
            prop_assert!(list.remove_item(&x).is_err());
            prop_assert!(list.set(at, x).is_err());
            prop_assert!(list.get(at).is_err());
            prop_assert!(list.clear().is_err());
            prop_assert_eq!(list.to_vec(), items);
        }
    }
}
