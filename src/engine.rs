//! Core puzzle engine for the missionaries-and-cannibals river crossing.
//!
//! This module defines the puzzle's fundamental components:
//! - `BankSide`: The two river banks the boat can sit on.
//! - `State`: One configuration of the world (bank occupancy, boat side,
//!   path cost, depth, and a back-reference to the parent state).
//! - `is_state_valid`: The safety rule that no bank may have cannibals
//!   outnumbering missionaries.
//! - `generate_child_states`: The successor function producing every legal
//!   boat crossing from a given state.
//! - `is_goal_state`: The goal test (everyone on the left bank).

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Number of missionaries in the puzzle. The cannibal head count is the same.
pub const PARTY_SIZE: u8 = 3;

/// Fare charged per missionary carried across, in rupees.
pub const MISSIONARY_FARE: u32 = 10;

/// Fare charged per cannibal carried across, in rupees.
pub const CANNIBAL_FARE: u32 = 20;

/// One of the two river banks.
///
/// Everyone (and the boat) starts on the right bank; the goal is to move the
/// whole party to the left bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BankSide {
    /// The starting bank.
    Right,
    /// The destination bank.
    Left,
}

impl BankSide {
    /// Returns the bank on the other side of the river.
    ///
    /// # Examples
    /// ```
    /// use river_crossing_solver::engine::BankSide;
    /// assert_eq!(BankSide::Right.opposite(), BankSide::Left);
    /// assert_eq!(BankSide::Left.opposite(), BankSide::Right);
    /// ```
    pub fn opposite(&self) -> BankSide {
        match self {
            BankSide::Right => BankSide::Left,
            BankSide::Left => BankSide::Right,
        }
    }
}

impl fmt::Display for BankSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BankSide::Right => write!(f, "Right"),
            BankSide::Left => write!(f, "Left"),
        }
    }
}

/// One configuration of the world: who is on the right bank, where the boat
/// is, and how this configuration was reached.
///
/// Only the right-bank counts are stored; the left-bank counts are always
/// derived as `PARTY_SIZE - right`, since the totals are fixed.
///
/// Two states are considered the *same search node* iff their right-bank
/// counts and boat side all match. Path cost, depth, and the parent link are
/// deliberately excluded from equality and hashing, so that open/closed-list
/// membership checks detect revisits regardless of how a state was reached.
///
/// States are immutable after construction. The parent link only ever points
/// from child to parent and is never reassigned, so the chain is acyclic by
/// construction and terminates at a parent-less root.
#[derive(Clone)]
pub struct State {
    boat_location: BankSide,
    missionaries_right: u8,
    cannibals_right: u8,
    path_cost: u32,
    depth: u32,
    parent: Option<Rc<State>>,
}

impl State {
    /// The canonical initial state: everyone on the right bank, boat on the
    /// right, depth 0, cost 0, no parent.
    ///
    /// # Examples
    /// ```
    /// use river_crossing_solver::engine::{BankSide, State};
    /// let root = State::initial();
    /// assert_eq!(root.missionaries_right(), 3);
    /// assert_eq!(root.cannibals_right(), 3);
    /// assert_eq!(root.boat_location(), BankSide::Right);
    /// assert_eq!(root.depth(), 0);
    /// assert_eq!(root.path_cost(), 0);
    /// assert!(root.parent().is_none());
    /// ```
    pub fn initial() -> State {
        State::new(BankSide::Right, PARTY_SIZE, PARTY_SIZE)
    }

    /// Creates a root state with the given configuration (depth 0, cost 0,
    /// no parent).
    ///
    /// The counts are not validated here; pass them through
    /// [`is_state_valid`] first if the configuration comes from outside the
    /// successor function.
    pub fn new(boat_location: BankSide, missionaries_right: u8, cannibals_right: u8) -> State {
        State {
            boat_location,
            missionaries_right,
            cannibals_right,
            path_cost: 0,
            depth: 0,
            parent: None,
        }
    }

    /// Builds a successor of `parent` with the boat moved to the other bank.
    ///
    /// Stamps `depth = parent.depth + 1` and charges the fare for every
    /// person whose bank changed. Only called with counts that already passed
    /// the validity check.
    fn child_of(parent: &Rc<State>, missionaries_right: u8, cannibals_right: u8) -> State {
        let missionaries_moved = u32::from(parent.missionaries_right.abs_diff(missionaries_right));
        let cannibals_moved = u32::from(parent.cannibals_right.abs_diff(cannibals_right));
        State {
            boat_location: parent.boat_location.opposite(),
            missionaries_right,
            cannibals_right,
            path_cost: parent.path_cost
                + missionaries_moved * MISSIONARY_FARE
                + cannibals_moved * CANNIBAL_FARE,
            depth: parent.depth + 1,
            parent: Some(Rc::clone(parent)),
        }
    }

    /// The bank the boat is currently on.
    pub fn boat_location(&self) -> BankSide {
        self.boat_location
    }

    /// Missionaries on the right bank.
    pub fn missionaries_right(&self) -> u8 {
        self.missionaries_right
    }

    /// Cannibals on the right bank.
    pub fn cannibals_right(&self) -> u8 {
        self.cannibals_right
    }

    /// Missionaries on the left bank (derived; totals are fixed).
    pub fn missionaries_left(&self) -> u8 {
        PARTY_SIZE - self.missionaries_right
    }

    /// Cannibals on the left bank (derived; totals are fixed).
    pub fn cannibals_left(&self) -> u8 {
        PARTY_SIZE - self.cannibals_right
    }

    /// Cumulative fare paid along the path from the root to this state.
    pub fn path_cost(&self) -> u32 {
        self.path_cost
    }

    /// Number of crossings from the root to this state.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// The state this one was expanded from, or `None` for a root.
    pub fn parent(&self) -> Option<&Rc<State>> {
        self.parent.as_ref()
    }
}

// Identity is the (missionaries_right, cannibals_right, boat_location)
// triple only. Hash must stay consistent with this.
impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.missionaries_right == other.missionaries_right
            && self.cannibals_right == other.cannibals_right
            && self.boat_location == other.boat_location
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.missionaries_right.hash(state);
        self.cannibals_right.hash(state);
        self.boat_location.hash(state);
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.missionaries_right, self.cannibals_right, self.boat_location
        )
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "The boat is on the {} side. Path cost: {}.",
            self.boat_location, self.path_cost
        )?;
        writeln!(
            f,
            "On right bank: {} missionaries and {} cannibals",
            self.missionaries_right, self.cannibals_right
        )?;
        write!(
            f,
            "On left bank:  {} missionaries and {} cannibals",
            self.missionaries_left(),
            self.cannibals_left()
        )
    }
}

/// Checks whether a candidate split of the party between the banks is safe.
///
/// Inputs are unconstrained integers: the successor function produces
/// candidates by plain subtraction, so counts can go negative or exceed the
/// party size. Out-of-range candidates simply yield `false`; this is never an
/// error.
///
/// A split is safe iff, on each bank, the missionaries present are not
/// outnumbered by cannibals (a bank with no missionaries is always safe).
///
/// # Examples
/// ```
/// use river_crossing_solver::engine::is_state_valid;
/// assert!(is_state_valid(3, 3));
/// assert!(is_state_valid(0, 0));
/// assert!(is_state_valid(3, 0));
/// assert!(!is_state_valid(1, 3)); // right bank: 1 missionary vs 3 cannibals
/// assert!(!is_state_valid(-1, 0)); // out of range
/// ```
pub fn is_state_valid(missionaries_right: i32, cannibals_right: i32) -> bool {
    let party = i32::from(PARTY_SIZE);

    if missionaries_right > party || cannibals_right > party {
        return false;
    }
    if missionaries_right < 0 || cannibals_right < 0 {
        return false;
    }
    if missionaries_right != 0 && missionaries_right < cannibals_right {
        return false;
    }

    let missionaries_left = party - missionaries_right;
    let cannibals_left = party - cannibals_right;
    if missionaries_left != 0 && missionaries_left < cannibals_left {
        return false;
    }

    true
}

/// Generates every state reachable from `parent` by one legal boat crossing.
///
/// The boat carries one or two occupants. Five occupant combinations are
/// tried, always in this order: one missionary + one cannibal, one missionary,
/// one cannibal, two cannibals, two missionaries. The ordering is fixed
/// because it determines which branch depth-first search commits to first.
///
/// When the boat is on the right bank, occupants move right-to-left (the
/// right-bank counts decrease); on the left bank, left-to-right. Combinations
/// that fail [`is_state_valid`] are dropped. Each surviving child gets the
/// boat side flipped, `parent` as its parent link, depth stamped one deeper,
/// and the crossing fare added to its path cost.
///
/// Returns between zero and five children; an empty result is a legal dead
/// end, not an error.
pub fn generate_child_states(parent: &Rc<State>) -> Vec<Rc<State>> {
    let m_right = i32::from(parent.missionaries_right());
    let c_right = i32::from(parent.cannibals_right());

    // (missionaries, cannibals) aboard for each candidate crossing.
    const BOAT_LOADS: [(i32, i32); 5] = [(1, 1), (1, 0), (0, 1), (0, 2), (2, 0)];

    let sign = match parent.boat_location() {
        BankSide::Right => -1,
        BankSide::Left => 1,
    };

    BOAT_LOADS
        .iter()
        .map(|&(m_aboard, c_aboard)| (m_right + sign * m_aboard, c_right + sign * c_aboard))
        .filter(|&(m, c)| is_state_valid(m, c))
        .map(|(m, c)| Rc::new(State::child_of(parent, m as u8, c as u8)))
        .collect()
}

/// Returns `true` iff everyone has crossed to the left bank.
///
/// # Examples
/// ```
/// use river_crossing_solver::engine::{is_goal_state, BankSide, State};
/// assert!(is_goal_state(&State::new(BankSide::Left, 0, 0)));
/// assert!(!is_goal_state(&State::initial()));
/// ```
pub fn is_goal_state(state: &State) -> bool {
    state.missionaries_right() == 0 && state.cannibals_right() == 0
}
