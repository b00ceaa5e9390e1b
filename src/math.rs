/// Type alias for sets, we use this to hide which type of `HashSet` we are actually using.
pub type Set<S> = fxhash::FxHashSet<S>;
/// Type alias for maps, we use this to hide which type of `HashMap` we are actually using.
pub type Map<K, V> = fxhash::FxHashMap<K, V>;

/// A set of state indices, backed by a bit vector. This is used for sets of states that
/// are dense, such as the accepting states of an automaton.
pub type StateSet = bit_set::BitSet;
