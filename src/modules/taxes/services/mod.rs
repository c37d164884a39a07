pub mod itbis_calculator;

pub use itbis_calculator::ItbisCalculator;
