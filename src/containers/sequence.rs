//! Sequence: manually managed growable vector
//!
//! `Sequence<T>` owns a single contiguous buffer and tracks its capacity and
//! length explicitly. Only the first `len` slots hold live values; the rest
//! are uninitialized. Growth replaces the buffer with a larger one sized by
//! the [`SequenceConfig`] growth policy.
//!
//! Ownership follows value semantics: [`Clone`] makes an independent deep
//! copy, [`Sequence::take`] moves the buffer out and leaves the source empty.

use crate::config::{Config, SequenceConfig};
use crate::containers::trace::{TraceEvent, TraceHook};
use crate::error::{check_bounds, check_insert_position, Result, SeqError};
use std::alloc::{self, Layout};
use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};
use std::ptr::{self, NonNull};
use std::slice;

/// Growable sequence with explicit capacity and length
///
/// # Examples
///
/// ```rust
/// use seqkit::Sequence;
///
/// let mut seq = Sequence::new(0).unwrap();
/// assert_eq!(seq.capacity(), 10);
///
/// seq.append(42).unwrap();
/// seq.insert(0, 7).unwrap();
/// assert_eq!(seq.as_slice(), &[7, 42]);
/// assert_eq!(seq.get(5), None);
/// ```
pub struct Sequence<T> {
    ptr: Option<NonNull<T>>,
    len: usize,
    cap: usize,
    config: SequenceConfig,
    trace: Option<TraceHook>,
}

impl<T> Sequence<T> {
    /// Create a sequence with room for `capacity` elements
    ///
    /// A capacity of zero is replaced by the default capacity (10).
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_config(capacity, &SequenceConfig::default())
    }

    /// Create a sequence using a custom growth configuration
    ///
    /// A capacity of zero is replaced by `config.default_capacity`. The
    /// configuration is validated first; a growth policy that could fail
    /// to enlarge the buffer is rejected with `Configuration`.
    pub fn with_config(capacity: usize, config: &SequenceConfig) -> Result<Self> {
        config.validate()?;
        let capacity = if capacity == 0 {
            config.default_capacity
        } else {
            capacity
        };
        Self::with_exact_capacity(capacity, *config, None)
    }

    /// Create an empty, unallocated sequence
    ///
    /// This is the state a sequence is left in after [`take`](Self::take).
    #[inline]
    pub fn empty() -> Self {
        Self::unallocated(SequenceConfig::default(), None)
    }

    #[inline]
    fn unallocated(config: SequenceConfig, trace: Option<TraceHook>) -> Self {
        Self {
            ptr: None,
            len: 0,
            cap: 0,
            config,
            trace,
        }
    }

    fn with_exact_capacity(
        capacity: usize,
        config: SequenceConfig,
        trace: Option<TraceHook>,
    ) -> Result<Self> {
        let ptr = Self::allocate_buffer(capacity)?;
        let seq = Self {
            ptr,
            len: 0,
            cap: capacity,
            config,
            trace,
        };
        if capacity > 0 {
            seq.emit(TraceEvent::Allocated { capacity });
        }
        Ok(seq)
    }

    /// New empty sequence sharing this sequence's configuration and trace hook.
    ///
    /// A zero `capacity` leaves the result unallocated.
    pub(crate) fn sibling(&self, capacity: usize) -> Result<Self> {
        Self::with_exact_capacity(capacity, self.config, self.trace.clone())
    }

    fn allocate_buffer(capacity: usize) -> Result<Option<NonNull<T>>> {
        if capacity == 0 {
            return Ok(None);
        }
        if mem::size_of::<T>() == 0 {
            return Ok(Some(NonNull::dangling()));
        }

        let layout = Layout::array::<T>(capacity)
            .map_err(|_| SeqError::out_of_memory(capacity.saturating_mul(mem::size_of::<T>())))?;

        let ptr = unsafe { alloc::alloc(layout) as *mut T };
        NonNull::new(ptr)
            .map(Some)
            .ok_or_else(|| SeqError::out_of_memory(layout.size()))
    }

    /// # Safety
    ///
    /// `ptr` must have been returned by `allocate_buffer(capacity)` and not
    /// released since.
    unsafe fn release_buffer(ptr: NonNull<T>, capacity: usize) {
        if mem::size_of::<T>() == 0 || capacity == 0 {
            return;
        }
        if let Ok(layout) = Layout::array::<T>(capacity) {
            unsafe { alloc::dealloc(ptr.as_ptr() as *mut u8, layout) };
        }
    }

    fn emit(&self, event: TraceEvent) {
        if self.config.log_lifecycle {
            log::trace!("sequence {}", event);
        }
        if let Some(hook) = &self.trace {
            hook(&event);
        }
    }

    /// Install a callback receiving this sequence's lifecycle events
    ///
    /// Copies made afterwards inherit the hook.
    pub fn set_trace_hook(&mut self, hook: TraceHook) {
        self.trace = Some(hook);
    }

    /// Remove the lifecycle callback, if any
    pub fn clear_trace_hook(&mut self) {
        self.trace = None;
    }

    /// Number of live elements
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the sequence has no live elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Growth configuration of this sequence
    #[inline]
    pub fn config(&self) -> &SequenceConfig {
        &self.config
    }

    #[inline]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        match self.ptr {
            Some(ptr) => ptr.as_ptr(),
            None => ptr::null_mut(),
        }
    }

    /// Live elements as a slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match self.ptr {
            Some(ptr) if self.len > 0 => unsafe { slice::from_raw_parts(ptr.as_ptr(), self.len) },
            _ => &[],
        }
    }

    /// Live elements as a mutable slice
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self.ptr {
            Some(ptr) if self.len > 0 => unsafe {
                slice::from_raw_parts_mut(ptr.as_ptr(), self.len)
            },
            _ => &mut [],
        }
    }

    /// Iterate over live elements
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Replace the buffer with one of `max(min_grow_capacity, growth_factor * capacity)` slots
    fn grow(&mut self) -> Result<()> {
        let old_cap = self.cap;
        let scaled = old_cap
            .checked_mul(self.config.growth_factor)
            .ok_or_else(|| SeqError::out_of_memory(usize::MAX))?;
        let new_cap = scaled.max(self.config.min_grow_capacity);
        if new_cap <= old_cap {
            return Err(SeqError::configuration(format!(
                "growth policy does not enlarge capacity {}",
                old_cap
            )));
        }

        let new_ptr = Self::allocate_buffer(new_cap)?;
        if let Some(old_ptr) = self.ptr {
            unsafe {
                if let Some(new_ptr) = new_ptr {
                    ptr::copy_nonoverlapping(old_ptr.as_ptr(), new_ptr.as_ptr(), self.len);
                }
                Self::release_buffer(old_ptr, old_cap);
            }
        }

        self.ptr = new_ptr;
        self.cap = new_cap;
        self.emit(TraceEvent::Grown {
            from: old_cap,
            to: new_cap,
        });
        Ok(())
    }

    /// Make room for at least one more element
    #[inline]
    pub(crate) fn reserve_one(&mut self) -> Result<()> {
        if self.len >= self.cap {
            self.grow()?;
        }
        Ok(())
    }

    /// Append an element at the end, growing if full
    pub fn append(&mut self, value: T) -> Result<()> {
        self.reserve_one()?;
        unsafe {
            ptr::write(self.as_mut_ptr().add(self.len), value);
        }
        self.len += 1;
        Ok(())
    }

    /// Insert an element at `index`, shifting later elements right
    ///
    /// `index == len()` appends. Fails with `OutOfBounds` if `index > len()`;
    /// the sequence is left untouched in that case.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        check_insert_position(index, self.len)?;
        self.reserve_one()?;

        unsafe {
            let slot = self.as_mut_ptr().add(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            ptr::write(slot, value);
        }
        self.len += 1;
        Ok(())
    }

    /// Remove and return the element at `index`, shifting later elements left
    pub fn delete(&mut self, index: usize) -> Result<T> {
        if self.len == 0 {
            return Err(SeqError::empty("delete"));
        }
        check_bounds(index, self.len)?;

        unsafe {
            let slot = self.as_mut_ptr().add(index);
            let value = ptr::read(slot);
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            self.len -= 1;
            Ok(value)
        }
    }

    /// Reference to the element at `index`, or `None` past the end
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Mutable reference to the element at `index`, or `None` past the end
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Overwrite the element at `index`
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        check_bounds(index, self.len)?;
        self.as_mut_slice()[index] = value;
        Ok(())
    }

    /// Drop all live elements, keeping the buffer
    pub fn clear(&mut self) {
        let live: *mut [T] = self.as_mut_slice();
        // Length first, so a panicking destructor cannot cause a double drop.
        self.len = 0;
        unsafe { ptr::drop_in_place(live) };
    }

    /// Move the buffer out, leaving `self` empty with zero capacity
    ///
    /// The returned sequence keeps this sequence's configuration and trace
    /// hook; so does the emptied source, which stays valid for reuse.
    pub fn take(&mut self) -> Self {
        let emptied = Self::unallocated(self.config, self.trace.clone());
        let moved = mem::replace(self, emptied);
        self.emit(TraceEvent::Moved { len: moved.len });
        moved
    }

    /// Deep copy reporting allocation failure instead of panicking
    ///
    /// The copy has the same capacity as the source. A zero-capacity source
    /// yields a zero-capacity, unallocated copy.
    pub fn try_clone(&self) -> Result<Self>
    where
        T: Clone,
    {
        let mut copy = Self::unallocated(self.config, self.trace.clone());
        copy.ptr = Self::allocate_buffer(self.cap)?;
        copy.cap = self.cap;
        for item in self.as_slice() {
            unsafe { ptr::write(copy.as_mut_ptr().add(copy.len), item.clone()) };
            copy.len += 1;
        }
        copy.emit(TraceEvent::Copied {
            capacity: copy.cap,
            len: copy.len,
        });
        Ok(copy)
    }

    /// Build a sequence holding clones of `values`
    pub fn from_slice(values: &[T]) -> Result<Self>
    where
        T: Clone,
    {
        let mut seq = Self::new(values.len())?;
        for value in values {
            seq.append(value.clone())?;
        }
        Ok(seq)
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Drop for Sequence<T> {
    fn drop(&mut self) {
        self.clear();
        if let Some(ptr) = self.ptr.take() {
            unsafe { Self::release_buffer(ptr, self.cap) };
            if self.cap > 0 {
                self.emit(TraceEvent::Released { capacity: self.cap });
            }
        }
    }
}

impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(e) => panic!("sequence copy failed: {}", e),
        }
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for Sequence<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Sequence is empty");
        }
        write!(f, "Elements ({}/{}):", self.len, self.cap)?;
        for item in self.as_slice() {
            write!(f, " {}", item)?;
        }
        Ok(())
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Sequence<T> {}

// Safety: the buffer is uniquely owned; the trace hook is Send + Sync.
unsafe impl<T: Send> Send for Sequence<T> {}

// Safety: shared access only hands out &T.
unsafe impl<T: Sync> Sync for Sequence<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use std::sync::{Arc, Mutex};

    fn recorded() -> (TraceHook, Arc<Mutex<Vec<TraceEvent>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let hook: TraceHook = Arc::new(move |event| sink.lock().unwrap().push(*event));
        (hook, events)
    }

    #[test]
    fn test_new_substitutes_default_capacity() {
        let seq: Sequence<i32> = Sequence::new(0).unwrap();
        assert_eq!(seq.capacity(), 10);
        assert_eq!(seq.len(), 0);
        assert!(seq.is_empty());

        let seq: Sequence<i32> = Sequence::new(3).unwrap();
        assert_eq!(seq.capacity(), 3);
    }

    #[test]
    fn test_empty_is_unallocated() {
        let seq: Sequence<u8> = Sequence::empty();
        assert_eq!(seq.capacity(), 0);
        assert!(seq.as_slice().is_empty());
        let default: Sequence<u8> = Sequence::default();
        assert_eq!(default.capacity(), 0);
    }

    #[test]
    fn test_append_grows_by_doubling() {
        let mut seq = Sequence::new(2).unwrap();
        seq.append(1).unwrap();
        seq.append(2).unwrap();
        assert_eq!(seq.capacity(), 2);

        // max(10, 2 * 2)
        seq.append(3).unwrap();
        assert_eq!(seq.capacity(), 10);

        for i in 4..=11 {
            seq.append(i).unwrap();
        }
        assert_eq!(seq.capacity(), 20);
        assert_eq!(seq.len(), 11);
        assert_eq!(seq.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
    }

    #[test]
    fn test_empty_grows_to_minimum() {
        let mut seq = Sequence::empty();
        seq.append(5).unwrap();
        assert_eq!(seq.capacity(), 10);
        assert_eq!(seq[0], 5);
    }

    #[test]
    fn test_custom_growth_policy() {
        let config = SequenceConfig {
            default_capacity: 1,
            min_grow_capacity: 3,
            growth_factor: 4,
            ..SequenceConfig::default()
        };
        let mut seq = Sequence::with_config(0, &config).unwrap();
        assert_eq!(seq.capacity(), 1);
        seq.append('a').unwrap();
        seq.append('b').unwrap();
        assert_eq!(seq.capacity(), 4);
        for c in ['c', 'd', 'e'] {
            seq.append(c).unwrap();
        }
        assert_eq!(seq.capacity(), 16);
    }

    #[test]
    fn test_with_config_rejects_invalid_growth() {
        let stalled = SequenceConfig {
            default_capacity: 1,
            min_grow_capacity: 1,
            growth_factor: 1,
            ..SequenceConfig::default()
        };
        let result = Sequence::<i32>::with_config(0, &stalled);
        assert!(matches!(result, Err(SeqError::Configuration { .. })));

        let zeroed = SequenceConfig {
            min_grow_capacity: 0,
            growth_factor: 0,
            ..SequenceConfig::default()
        };
        let result = Sequence::<i32>::with_config(0, &zeroed);
        assert!(matches!(result, Err(SeqError::Configuration { .. })));
    }

    #[test]
    fn test_grow_refuses_policy_that_does_not_enlarge() {
        let zeroed = SequenceConfig {
            min_grow_capacity: 0,
            growth_factor: 0,
            ..SequenceConfig::default()
        };
        let mut seq: Sequence<i32> = Sequence::unallocated(zeroed, None);
        assert!(matches!(seq.append(1), Err(SeqError::Configuration { .. })));
        assert_eq!(seq.len(), 0);
        assert_eq!(seq.capacity(), 0);

        let stalled = SequenceConfig {
            min_grow_capacity: 1,
            growth_factor: 1,
            ..SequenceConfig::default()
        };
        let mut seq: Sequence<i32> = Sequence::unallocated(stalled, None);
        seq.append(1).unwrap();
        assert_eq!(seq.capacity(), 1);
        assert!(matches!(seq.append(2), Err(SeqError::Configuration { .. })));
        assert!(matches!(seq.insert(0, 2), Err(SeqError::Configuration { .. })));
        assert_eq!(seq.as_slice(), &[1]);
        assert!(seq.len() <= seq.capacity());
    }

    #[test]
    fn test_insert() {
        let mut seq = Sequence::new(0).unwrap();
        seq.append(1).unwrap();
        seq.append(3).unwrap();
        seq.insert(1, 2).unwrap();
        seq.insert(0, 0).unwrap();
        seq.insert(4, 4).unwrap();
        assert_eq!(seq.as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_insert_out_of_bounds_leaves_sequence_untouched() {
        let mut seq = Sequence::new(1).unwrap();
        seq.append(1).unwrap();
        let err = seq.insert(3, 9).unwrap_err();
        assert_eq!(err, SeqError::out_of_bounds(3, 1));
        assert_eq!(seq.capacity(), 1);
        assert_eq!(seq.as_slice(), &[1]);
    }

    #[test]
    fn test_insert_into_full_sequence_grows() {
        let mut seq = Sequence::new(2).unwrap();
        seq.append(1).unwrap();
        seq.append(3).unwrap();
        seq.insert(1, 2).unwrap();
        assert_eq!(seq.capacity(), 10);
        assert_eq!(seq.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_delete() {
        let mut seq = Sequence::from_slice(&[10, 20, 30, 40]).unwrap();
        assert_eq!(seq.delete(1).unwrap(), 20);
        assert_eq!(seq.as_slice(), &[10, 30, 40]);
        assert_eq!(seq.delete(2).unwrap(), 40);
        assert_eq!(seq.as_slice(), &[10, 30]);
        assert_eq!(seq.delete(2), Err(SeqError::out_of_bounds(2, 2)));
    }

    #[test]
    fn test_delete_empty() {
        let mut seq: Sequence<i32> = Sequence::new(0).unwrap();
        assert_eq!(seq.delete(0), Err(SeqError::empty("delete")));
    }

    #[test]
    fn test_get_and_set() {
        let mut seq = Sequence::from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(seq.get(0), Some(&1));
        assert_eq!(seq.get(3), None);
        assert_eq!(seq.get(usize::MAX), None);

        seq.set(2, 30).unwrap();
        assert_eq!(seq[2], 30);
        assert_eq!(seq.set(3, 4), Err(SeqError::out_of_bounds(3, 3)));

        *seq.get_mut(0).unwrap() = 100;
        seq[1] = 200;
        assert_eq!(seq.as_slice(), &[100, 200, 30]);
    }

    #[test]
    fn test_clone_is_deep_and_keeps_capacity() {
        let mut original = Sequence::new(16).unwrap();
        original.append(String::from("a")).unwrap();
        original.append(String::from("b")).unwrap();

        let mut copy = original.clone();
        assert_eq!(copy, original);
        assert_eq!(copy.capacity(), 16);

        copy.set(0, String::from("z")).unwrap();
        copy.append(String::from("c")).unwrap();
        assert_eq!(original.as_slice(), &["a", "b"]);
        assert_eq!(copy.as_slice(), &["z", "b", "c"]);
    }

    #[test]
    fn test_clone_of_unallocated() {
        let empty: Sequence<i64> = Sequence::empty();
        let copy = empty.try_clone().unwrap();
        assert_eq!(copy.capacity(), 0);
        assert!(copy.is_empty());
    }

    #[test]
    fn test_take_moves_buffer() {
        let mut source = Sequence::from_slice(&[1, 2, 3]).unwrap();
        let cap = source.capacity();
        let moved = source.take();

        assert_eq!(moved.as_slice(), &[1, 2, 3]);
        assert_eq!(moved.capacity(), cap);
        assert_eq!(source.len(), 0);
        assert_eq!(source.capacity(), 0);

        // Moved-from sequence is reusable
        source.append(9).unwrap();
        assert_eq!(source.as_slice(), &[9]);
    }

    #[test]
    fn test_elements_dropped_exactly_once() {
        let tracker = Rc::new(());
        {
            let mut seq = Sequence::new(1).unwrap();
            for _ in 0..25 {
                seq.append(Rc::clone(&tracker)).unwrap();
            }
            let removed = seq.delete(3).unwrap();
            drop(removed);
            seq.set(0, Rc::clone(&tracker)).unwrap();
            let copy = seq.clone();
            assert_eq!(Rc::strong_count(&tracker), 1 + 24 + 24);
            drop(copy);
            seq.clear();
            assert_eq!(Rc::strong_count(&tracker), 1);
            seq.append(Rc::clone(&tracker)).unwrap();
        }
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn test_zero_sized_elements() {
        let mut seq = Sequence::new(0).unwrap();
        for _ in 0..100 {
            seq.append(()).unwrap();
        }
        assert_eq!(seq.len(), 100);
        assert_eq!(seq.delete(50).unwrap(), ());
        assert_eq!(seq.len(), 99);
    }

    #[test]
    fn test_trace_hook_sees_lifecycle() {
        let (hook, events) = recorded();
        {
            let mut seq = Sequence::new(1).unwrap();
            seq.set_trace_hook(hook);
            seq.append(1).unwrap();
            seq.append(2).unwrap();
            let copy = seq.clone();
            drop(copy);
            let moved = seq.take();
            drop(moved);
        }

        let events = events.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                TraceEvent::Grown { from: 1, to: 10 },
                TraceEvent::Copied { capacity: 10, len: 2 },
                TraceEvent::Released { capacity: 10 },
                TraceEvent::Moved { len: 2 },
                TraceEvent::Released { capacity: 10 },
            ]
        );
    }

    #[test]
    fn test_display() {
        let seq = Sequence::from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(seq.to_string(), "Elements (3/3): 1 2 3");
        let empty: Sequence<i32> = Sequence::new(0).unwrap();
        assert_eq!(empty.to_string(), "Sequence is empty");
    }

    #[test]
    fn test_iter() {
        let seq = Sequence::from_slice(&[1, 2, 3]).unwrap();
        let doubled: Vec<i32> = seq.iter().map(|x| x * 2).collect();
        assert_eq!(doubled, vec![2, 4, 6]);
        let mut total = 0;
        for x in &seq {
            total += x;
        }
        assert_eq!(total, 6);
    }
}
