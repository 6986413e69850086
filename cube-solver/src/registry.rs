//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::settings::RunSettings;
use crate::solver::Solver;

// ============================================================================
// Storage Constants and Index Calculation
// ============================================================================

/// Highest supported day number
pub const MAX_DAY: u8 = 25;

/// Calculate flat index from day, returning None if out of bounds
#[inline]
fn calc_index(day: u8) -> Option<usize> {
    (1..=MAX_DAY).contains(&day).then(|| usize::from(day - 1))
}

/// Reconstruct day from flat index
#[inline]
fn from_index(index: usize) -> u8 {
    index as u8 + 1
}

// ============================================================================
// Factory Types
// ============================================================================

/// Thread-safe factory function type for creating solver instances
pub type SolverFactory = Box<
    dyn for<'a> Fn(&'a str, &RunSettings) -> Result<Box<dyn DynSolver + 'a>, ParseError>
        + Send
        + Sync,
>;

/// Metadata about a registered solver factory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    /// The day number (1-25)
    pub day: u8,
    /// Human readable puzzle name
    pub name: &'static str,
    /// Number of parts this solver supports
    pub parts: u8,
}

/// Factory entry with metadata
struct SolverFactoryEntry {
    factory: SolverFactory,
    name: &'static str,
    parts: u8,
}

impl SolverFactoryEntry {
    fn info(&self, day: u8) -> FactoryInfo {
        FactoryInfo {
            day,
            name: self.name,
            parts: self.parts,
        }
    }
}

/// Parse `input` into a boxed, type-erased instance of `S`
fn instantiate<'a, S>(
    day: u8,
    input: &'a str,
    settings: &RunSettings,
) -> Result<Box<dyn DynSolver + 'a>, ParseError>
where
    S: Solver + 'static,
{
    Ok(Box::new(SolverInstance::<S>::new(day, input, settings)?))
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for constructing a [`SolverRegistry`] with fluent API
///
/// Registration detects duplicates and out-of-range days; the registry is
/// immutable once built.
///
/// # Example
///
/// ```
/// use cube_solver::{ParseError, PuzzleParser, RegistryBuilder, RunSettings, SolveError, Solver};
///
/// struct Echo;
///
/// impl PuzzleParser for Echo {
///     type SharedData<'a> = &'a str;
///
///     fn parse<'a>(input: &'a str, _: &RunSettings) -> Result<&'a str, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl Solver for Echo {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut &str, _: u8) -> Result<String, SolveError> {
///         Ok(shared.to_string())
///     }
/// }
///
/// let registry = RegistryBuilder::new().register_solver::<Echo>(3, "echo").unwrap().build();
/// let mut solver = registry.create_solver(3, "hello", &RunSettings::default()).unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "hello");
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..MAX_DAY).map(|_| None).collect(),
        }
    }

    /// Register a solver factory with explicit metadata
    ///
    /// Returns an error if the day is out of bounds or already registered.
    pub fn register<F>(
        mut self,
        day: u8,
        name: &'static str,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str, &RunSettings) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = calc_index(day).ok_or(RegistrationError::InvalidDay(day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(day));
        }

        self.entries[index] = Some(SolverFactoryEntry {
            factory: Box::new(factory),
            name,
            parts,
        });
        Ok(self)
    }

    /// Register a [`Solver`] type directly
    pub fn register_solver<S>(self, day: u8, name: &'static str) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register(day, name, S::PARTS, move |input: &str, settings: &RunSettings| {
            instantiate::<S>(day, input, settings)
        })
    }

    /// Register all collected solver plugins
    ///
    /// Iterates through all plugins submitted via `inventory::submit!`.
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use cube_solver::RegistryBuilder;
    /// // Register only solvers tagged as "parsing"
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.tags.contains(&"parsing"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.day, plugin.name)?;
            }
        }
        Ok(self)
    }

    /// Build the immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            storage: SolverStorage {
                entries: self.entries,
            },
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Storage and Registry
// ============================================================================

/// Immutable storage for solver factories with O(1) access
pub struct SolverStorage {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl SolverStorage {
    /// Iterate over metadata for all registered factories, in day order
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(i, entry)| entry.as_ref().map(|e| e.info(from_index(i))))
    }

    /// Get metadata for a specific factory
    pub fn get_info(&self, day: u8) -> Option<FactoryInfo> {
        self.entry(day).map(|e| e.info(day))
    }

    /// Check if a factory exists for the day
    pub fn contains(&self, day: u8) -> bool {
        self.entry(day).is_some()
    }

    /// Get the number of registered factories
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Check if storage is empty
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }

    fn entry(&self, day: u8) -> Option<&SolverFactoryEntry> {
        calc_index(day).and_then(|i| self.entries.get(i)?.as_ref())
    }
}

/// Registry wrapping storage with solver creation method
pub struct SolverRegistry {
    storage: SolverStorage,
}

impl SolverRegistry {
    /// Get readonly access to the factory storage for iteration/lookup
    pub fn storage(&self) -> &SolverStorage {
        &self.storage
    }

    /// Create a solver instance by parsing `input` for the given day
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Successfully created solver
    /// * `Err(SolverError)` - Day out of range, not registered, or parsing failed
    pub fn create_solver<'a>(
        &self,
        day: u8,
        input: &'a str,
        settings: &RunSettings,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        calc_index(day).ok_or(SolverError::InvalidDay(day))?;
        let entry = self.storage.entry(day).ok_or(SolverError::NotFound(day))?;

        (entry.factory)(input, settings).map_err(SolverError::ParseError)
    }
}

// ============================================================================
// Plugin System
// ============================================================================

/// Trait for solvers that can register themselves with a registry builder
///
/// Unlike [`Solver`], this trait has no associated types, so different
/// solver types can be collected behind `&'static dyn RegisterableSolver`.
/// Every `Solver + Sync + 'static` gets it through a blanket impl.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a specific day
    fn register_with(
        &self,
        builder: RegistryBuilder,
        day: u8,
        name: &'static str,
    ) -> Result<RegistryBuilder, RegistrationError>;

    /// Get the number of parts this solver supports
    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        day: u8,
        name: &'static str,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register_solver::<S>(day, name)
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// Plugin information for automatic solver registration
///
/// Usually submitted by `#[derive(AutoRegisterSolver)]` rather than by hand.
pub struct SolverPlugin {
    /// The day number (1-25)
    pub day: u8,
    /// Human readable puzzle name
    pub name: &'static str,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Optional tags for filtering (e.g., "parsing", "grid")
    pub tags: &'static [&'static str],
}

// Enable plugin collection via inventory
inventory::collect!(SolverPlugin);
