//! Per-dimension unit tables

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;
use tracing::debug;
use zunits_core::{Dimension, UnitError};
use crate::unit::{superscript_symbol, Unit, UnitKind};
use crate::units;

/// Global unit registry with every built-in table
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(|| {
    UnitRegistry::standard().expect("built-in unit tables are consistent")
});

#[derive(Debug, Default)]
struct UnitTable {
    units: Vec<Unit>,
    by_symbol: HashMap<String, usize>,
    aliases: BTreeMap<String, usize>,
    base: Option<usize>,
}

impl UnitTable {
    fn index_of(&self, symbol: &str) -> Option<usize> {
        self.by_symbol
            .get(symbol)
            .or_else(|| self.aliases.get(symbol))
            .copied()
    }
}

/// Registry of units, keyed by dimension and symbol
#[derive(Debug, Default)]
pub struct UnitRegistry {
    tables: HashMap<Dimension, UnitTable>,
}

impl UnitRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in table, checked for completeness
    pub fn standard() -> Result<Self, UnitError> {
        let mut registry = Self::new();
        units::register_all(&mut registry)?;
        registry.validate()?;
        debug!(
            dimensions = registry.tables.len(),
            units = registry.tables.values().map(|t| t.units.len()).sum::<usize>(),
            "unit registry built"
        );
        Ok(registry)
    }

    /// Register the base unit of a dimension
    pub fn register_base(&mut self, unit: Unit) -> Result<(), UnitError> {
        if !unit.is_identity() {
            return Err(UnitError::invalid_definition(
                &unit.symbol,
                "a base unit must have scale 1 and offset 0",
            ));
        }
        if let Some(existing) = self.tables.get(&unit.dimension).and_then(|t| t.base) {
            let table = &self.tables[&unit.dimension];
            return Err(UnitError::DuplicateUnit {
                unit: format!("{} (base already {})", unit.symbol, table.units[existing].symbol),
                dimension: unit.dimension,
            });
        }
        let dimension = unit.dimension;
        let index = self.insert(unit)?;
        if let Some(table) = self.tables.get_mut(&dimension) {
            table.base = Some(index);
        }
        Ok(())
    }

    /// Register a unit, with its expression and superscript forms as aliases
    pub fn register(&mut self, unit: Unit) -> Result<(), UnitError> {
        self.insert(unit).map(|_| ())
    }

    /// Define and register a unit in one call
    pub fn define(
        &mut self,
        dimension: Dimension,
        expression: &str,
        scale: f64,
        offset: f64,
        kind: UnitKind,
    ) -> Result<(), UnitError> {
        self.register(Unit::with_kind(dimension, expression, scale, offset, kind)?)
    }

    /// Add an explicit alias for a registered symbol
    pub fn alias(&mut self, dimension: Dimension, alias: &str, symbol: &str) -> Result<(), UnitError> {
        let table = self.tables.get_mut(&dimension)
            .ok_or_else(|| UnitError::unit_not_found(symbol, dimension))?;
        let index = *table.by_symbol.get(symbol)
            .ok_or_else(|| UnitError::unit_not_found(symbol, dimension))?;
        if table.index_of(alias).is_some() {
            return Err(UnitError::DuplicateUnit { unit: alias.to_string(), dimension });
        }
        table.aliases.insert(alias.to_string(), index);
        Ok(())
    }

    fn insert(&mut self, unit: Unit) -> Result<usize, UnitError> {
        let dimension = unit.dimension;
        let table = self.tables.entry(dimension).or_default();
        if table.index_of(&unit.symbol).is_some() {
            return Err(UnitError::DuplicateUnit { unit: unit.symbol, dimension });
        }

        let index = table.units.len();
        let derived: Vec<String> = [unit.expression.clone(), superscript_symbol(&unit.expression)]
            .into_iter()
            .filter(|s| *s != unit.symbol)
            .collect();
        for alias in &derived {
            if table.index_of(alias).is_some() {
                return Err(UnitError::DuplicateUnit { unit: alias.clone(), dimension });
            }
        }

        table.by_symbol.insert(unit.symbol.clone(), index);
        for alias in derived {
            table.aliases.insert(alias, index);
        }
        table.units.push(unit);
        Ok(index)
    }

    /// Check that every registered dimension has a base unit
    pub fn validate(&self) -> Result<(), UnitError> {
        for (dimension, table) in &self.tables {
            if table.base.is_none() {
                return Err(UnitError::invalid_definition(
                    dimension.name(),
                    "dimension has no base unit",
                ));
            }
        }
        Ok(())
    }

    /// Look up a unit by symbol or alias within a dimension
    pub fn resolve(&self, dimension: Dimension, symbol: &str) -> Result<&Unit, UnitError> {
        let symbol = symbol.trim();
        self.tables
            .get(&dimension)
            .and_then(|t| t.index_of(symbol).map(|i| &t.units[i]))
            .ok_or_else(|| UnitError::unit_not_found(symbol, dimension))
    }

    /// The base unit of a dimension
    pub fn base_unit(&self, dimension: Dimension) -> Result<&Unit, UnitError> {
        self.tables
            .get(&dimension)
            .and_then(|t| t.base.map(|i| &t.units[i]))
            .ok_or_else(|| UnitError::invalid_definition(dimension.name(), "dimension has no base unit"))
    }

    /// Canonical symbols of a dimension, in registration order
    pub fn units_of(&self, dimension: Dimension) -> Vec<&str> {
        self.tables
            .get(&dimension)
            .map(|t| t.units.iter().map(|u| u.symbol.as_str()).collect())
            .unwrap_or_default()
    }

    /// `(alias, canonical symbol)` pairs of a dimension, sorted by alias
    pub fn aliases_of(&self, dimension: Dimension) -> Vec<(&str, &str)> {
        self.tables
            .get(&dimension)
            .map(|t| {
                t.aliases
                    .iter()
                    .map(|(alias, &i)| (alias.as_str(), t.units[i].symbol.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Registered dimensions, in declaration order
    pub fn dimensions(&self) -> Vec<Dimension> {
        Dimension::ALL
            .iter()
            .copied()
            .filter(|d| self.tables.contains_key(d))
            .collect()
    }

    /// Check if a symbol or alias is registered for a dimension
    pub fn contains(&self, dimension: Dimension, symbol: &str) -> bool {
        self.tables
            .get(&dimension)
            .is_some_and(|t| t.index_of(symbol.trim()).is_some())
    }

    /// First dimension, in declaration order, registering both symbols
    pub fn find_common_dimension(&self, from: &str, to: &str) -> Result<Dimension, UnitError> {
        let dimensions = self.dimensions();
        if let Some(d) = dimensions.iter().find(|&&d| self.contains(d, from) && self.contains(d, to)) {
            return Ok(*d);
        }

        let home = |symbol: &str| dimensions.iter().copied().find(|&d| self.contains(d, symbol));
        match (home(from), home(to)) {
            (Some(a), Some(b)) => Err(UnitError::mismatch(a, b)),
            (None, Some(d)) => Err(UnitError::unit_not_found(from.trim(), d)),
            (Some(d), None) => Err(UnitError::unit_not_found(to.trim(), d)),
            (None, None) => Err(UnitError::unit_not_found(from.trim(), Dimension::Dimensionless)),
        }
    }
}
