//! Contains the definition of [`ArrayList`], the growable sequence used to buffer tokens and
//! diagnostics.

use std::{
    alloc::Layout,
    ops::{Index, IndexMut},
};

use thiserror::Error;

/// The number of slots allocated by [`ArrayList::new()`].
pub const INITIAL_CAPACITY: usize = 10;

/// Represents an error that occurs when operating on an [`ArrayList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
pub enum Error {
    /// The backing storage couldn't be obtained or grown to the requested capacity.
    #[error("failed to allocate storage for {requested_capacity} elements")]
    Allocation {
        /// The capacity that was requested.
        requested_capacity: usize,
    },

    /// The index is outside the live elements of the list.
    #[error("index {index} is out of bounds for a list of {len} elements")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,

        /// The number of live elements at the time of the request.
        len: usize,
    },
}

/// Computes the capacity the list grows to when it is full.
///
/// The capacity is multiplied by 1.5 (rounded up) and grows by at least one slot.
#[must_use]
pub fn grown_capacity(capacity: usize) -> usize {
    capacity
        .saturating_add(capacity.saturating_add(1) / 2)
        .max(capacity.saturating_add(1))
}

/// Terminates the process the same way [`Vec`] does when the allocator fails.
fn allocation_failure<T>(requested_capacity: usize) -> ! {
    match Layout::array::<T>(requested_capacity) {
        Ok(layout) => std::alloc::handle_alloc_error(layout),
        Err(_) => panic!("capacity overflow"),
    }
}

/// Represents a contiguous growable list that exclusively owns its elements.
///
/// The list keeps track of its own logical capacity, which grows geometrically by a factor of 1.5
/// whenever an element is added to a full list. Elements are never reordered: removing an element
/// shifts every element after it one slot to the left.
///
/// All the accessors are bounds checked and report [`Error::IndexOutOfBounds`] instead of
/// clamping the index.
#[derive(Debug)]
pub struct ArrayList<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        // the storage must be able to hold the tracked capacity without reallocating
        let mut list = Self::with_capacity(self.capacity)
            .unwrap_or_else(|_| allocation_failure::<T>(self.capacity));
        list.items.extend_from_slice(&self.items);

        list
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self { Self::new() }
}

impl<T> ArrayList<T> {
    /// Creates a new empty [`ArrayList`] with [`INITIAL_CAPACITY`] slots.
    ///
    /// Failing to allocate the storage terminates the process.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
            .unwrap_or_else(|_| allocation_failure::<T>(INITIAL_CAPACITY))
    }

    /// Creates a new empty [`ArrayList`] with room for `capacity` elements.
    ///
    /// # Errors
    /// - [`Error::Allocation`]: the storage couldn't be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        let mut items = Vec::new();
        items
            .try_reserve_exact(capacity)
            .map_err(|_| Error::Allocation {
                requested_capacity: capacity,
            })?;

        Ok(Self { items, capacity })
    }

    /// Returns the number of live elements in the list.
    #[must_use]
    pub fn len(&self) -> usize { self.items.len() }

    /// Returns `true` if the list contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    /// Returns the number of elements the list can hold before it has to grow.
    #[must_use]
    pub fn capacity(&self) -> usize { self.capacity }

    fn grow_if_full(&mut self) -> Result<(), Error> {
        if self.items.len() < self.capacity {
            return Ok(());
        }

        let new_capacity = grown_capacity(self.capacity);
        self.items
            .try_reserve_exact(new_capacity - self.items.len())
            .map_err(|_| Error::Allocation {
                requested_capacity: new_capacity,
            })?;
        self.capacity = new_capacity;

        Ok(())
    }

    /// Appends the element at the end of the list, growing the storage if the list is full.
    ///
    /// # Errors
    /// - [`Error::Allocation`]: the storage couldn't be grown; the element is dropped.
    pub fn try_push(&mut self, item: T) -> Result<(), Error> {
        self.grow_if_full()?;
        self.items.push(item);

        Ok(())
    }

    /// Appends the element at the end of the list.
    ///
    /// Failing to grow the storage terminates the process.
    pub fn push(&mut self, item: T) {
        if let Err(Error::Allocation { requested_capacity }) = self.try_push(item) {
            allocation_failure::<T>(requested_capacity)
        }
    }

    /// Inserts the element at the given index, shifting all the elements after it to the right.
    ///
    /// Inserting at `len()` is the same as [`Self::try_push()`].
    ///
    /// # Errors
    /// - [`Error::IndexOutOfBounds`]: `index` is greater than `len()`.
    /// - [`Error::Allocation`]: the storage couldn't be grown.
    pub fn insert_at(&mut self, index: usize, item: T) -> Result<(), Error> {
        if index > self.items.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }

        self.grow_if_full()?;
        self.items.insert(index, item);

        Ok(())
    }

    /// Returns a reference to the element at the given index.
    ///
    /// # Errors
    /// - [`Error::IndexOutOfBounds`]: `index` is not less than `len()`.
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        let len = self.items.len();
        self.items
            .get(index)
            .ok_or(Error::IndexOutOfBounds { index, len })
    }

    /// Returns a mutable reference to the element at the given index.
    ///
    /// # Errors
    /// - [`Error::IndexOutOfBounds`]: `index` is not less than `len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, len })
    }

    /// Removes the element at the given index and returns it. Every element after it is shifted
    /// one slot to the left.
    ///
    /// The capacity of the list is left unchanged.
    ///
    /// # Errors
    /// - [`Error::IndexOutOfBounds`]: `index` is not less than `len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, Error> {
        if index >= self.items.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }

        Ok(self.items.remove(index))
    }

    /// Returns the live elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] { &self.items }

    /// Returns an iterator over the elements in insertion order.
    pub fn iter(&self) -> std::slice::Iter<T> { self.items.iter() }

    /// Returns a mutable iterator over the elements in insertion order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<T> { self.items.iter_mut() }

    /// Dissolves the list into a [`Vec`] of its elements.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> { self.items }
}

// the capacity doesn't take part in the comparison, only the live elements do

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool { self.items == other.items }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: PartialOrd> PartialOrd for ArrayList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.items.partial_cmp(&other.items)
    }
}

impl<T: Ord> Ord for ArrayList<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering { self.items.cmp(&other.items) }
}

impl<T: std::hash::Hash> std::hash::Hash for ArrayList<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) { self.items.hash(state) }
}

impl<T> Index<usize> for ArrayList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output { &self.items[index] }
}

impl<T> IndexMut<usize> for ArrayList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output { &mut self.items[index] }
}

impl<T> IntoIterator for ArrayList<T> {
    type IntoIter = std::vec::IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter { self.items.into_iter() }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type IntoIter = std::slice::Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter { self.items.iter() }
}

impl<'a, T> IntoIterator for &'a mut ArrayList<T> {
    type IntoIter = std::slice::IterMut<'a, T>;
    type Item = &'a mut T;

    fn into_iter(self) -> Self::IntoIter { self.items.iter_mut() }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

#[cfg(test)]
mod tests;
