//! Arithmetic engine with a single pending binary operation.
//!
//! The engine keeps the last known value (the accumulator) and at most one
//! binary operation waiting for its right operand. It knows nothing about text
//! entry: the input controller pushes parsed values in and routes operation
//! symbols through [`ArithmeticEngine::perform_operation`].

use super::symbol::OperationSymbol;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => left / right,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOperator {
    ChangeSign,
    Percent,
}

impl UnaryOperator {
    pub fn apply(self, operand: f64) -> f64 {
        match self {
            Self::ChangeSign => -operand,
            Self::Percent => operand / 100.0,
        }
    }
}

/// What performing a symbol does to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Binary(BinaryOperator),
    Unary(UnaryOperator),
    /// Resolve the pending binary operation, if any.
    Calculate,
}

/// Look up the operation for a symbol.
///
/// Digits, the decimal point and the clear variants have no operation; they
/// are handled entirely by the input controller.
pub fn operation(symbol: OperationSymbol) -> Option<Operation> {
    use OperationSymbol as S;

    match symbol {
        S::Divide => Some(Operation::Binary(BinaryOperator::Divide)),
        S::Multiply => Some(Operation::Binary(BinaryOperator::Multiply)),
        S::Subtract => Some(Operation::Binary(BinaryOperator::Subtract)),
        S::Add => Some(Operation::Binary(BinaryOperator::Add)),
        S::ChangeSign => Some(Operation::Unary(UnaryOperator::ChangeSign)),
        S::Percent => Some(Operation::Unary(UnaryOperator::Percent)),
        S::Calculate => Some(Operation::Calculate),
        _ => None,
    }
}

/// A binary operation waiting for its right operand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingBinaryOperation {
    pub operator: BinaryOperator,
    pub left_operand: f64,
    pub symbol: OperationSymbol,
}

impl PendingBinaryOperation {
    pub fn perform(&self, right_operand: f64) -> f64 {
        self.operator.apply(self.left_operand, right_operand)
    }
}

/// Accumulator plus optional pending operation.
///
/// A `None` accumulator is the error/cleared state and is distinct from zero.
/// Non-finite results are stored as-is; rendering them is the display's job.
#[derive(Clone, Debug, PartialEq)]
pub struct ArithmeticEngine {
    accumulator: Option<f64>,
    pending: Option<PendingBinaryOperation>,
}

impl Default for ArithmeticEngine {
    fn default() -> Self {
        Self {
            accumulator: Some(0.0),
            pending: None,
        }
    }
}

impl ArithmeticEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accumulator(&self) -> Option<f64> {
        self.accumulator
    }

    pub fn set_accumulator(&mut self, value: Option<f64>) {
        self.accumulator = value;
    }

    pub fn clear_accumulator(&mut self) {
        self.accumulator = None;
    }

    pub fn clear_all(&mut self) {
        self.pending = None;
        self.clear_accumulator();
    }

    /// Symbol of the pending operation, used to highlight its button.
    pub fn pending_symbol(&self) -> Option<OperationSymbol> {
        self.pending.map(|pending| pending.symbol)
    }

    pub fn pending_left_operand(&self) -> Option<f64> {
        self.pending.map(|pending| pending.left_operand)
    }

    /// Perform the operation bound to `symbol`. Symbols without an operation
    /// are ignored.
    pub fn perform_operation(&mut self, symbol: OperationSymbol) {
        let Some(operation) = operation(symbol) else {
            return;
        };

        match operation {
            Operation::Binary(operator) => {
                // Chain: "5 + 3 ×" resolves 5 + 3 before capturing the product.
                self.perform_pending_operation();

                if let Some(left_operand) = self.accumulator {
                    self.pending = Some(PendingBinaryOperation {
                        operator,
                        left_operand,
                        symbol,
                    });
                    self.accumulator = None;
                }
            }
            Operation::Unary(operator) => {
                if let Some(value) = self.accumulator {
                    self.accumulator = Some(operator.apply(value));
                }
            }
            Operation::Calculate => self.perform_pending_operation(),
        }
    }

    fn perform_pending_operation(&mut self) {
        if let (Some(pending), Some(right_operand)) = (self.pending, self.accumulator) {
            self.accumulator = Some(pending.perform(right_operand));
            self.pending = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use OperationSymbol as S;

    fn engine_with(value: f64) -> ArithmeticEngine {
        let mut engine = ArithmeticEngine::new();
        engine.set_accumulator(Some(value));
        engine
    }

    #[test]
    fn test_initial_state() {
        let engine = ArithmeticEngine::new();
        assert_eq!(engine.accumulator(), Some(0.0));
        assert_eq!(engine.pending_symbol(), None);
        assert_eq!(engine.pending_left_operand(), None);
    }

    #[test]
    fn test_operation_table() {
        assert_eq!(
            operation(S::Divide),
            Some(Operation::Binary(BinaryOperator::Divide))
        );
        assert_eq!(
            operation(S::Percent),
            Some(Operation::Unary(UnaryOperator::Percent))
        );
        assert_eq!(operation(S::Calculate), Some(Operation::Calculate));
        assert_eq!(operation(S::Five), None);
        assert_eq!(operation(S::Decimal), None);
        assert_eq!(operation(S::Clear), None);
        assert_eq!(operation(S::AllClear), None);
    }

    #[test]
    fn test_binary_captures_left_operand() {
        let mut engine = engine_with(5.0);
        engine.perform_operation(S::Add);

        assert_eq!(engine.pending_symbol(), Some(S::Add));
        assert_eq!(engine.pending_left_operand(), Some(5.0));
        assert_eq!(engine.accumulator(), None);
    }

    #[test]
    fn test_calculate_resolves_and_clears_pending() {
        let mut engine = engine_with(5.0);
        engine.perform_operation(S::Add);
        engine.set_accumulator(Some(3.0));
        engine.perform_operation(S::Calculate);

        assert_eq!(engine.accumulator(), Some(8.0));
        assert_eq!(engine.pending_symbol(), None);
        assert_eq!(engine.pending_left_operand(), None);
    }

    #[test]
    fn test_operand_order() {
        let mut engine = engine_with(10.0);
        engine.perform_operation(S::Subtract);
        engine.set_accumulator(Some(4.0));
        engine.perform_operation(S::Calculate);
        assert_eq!(engine.accumulator(), Some(6.0));

        engine.perform_operation(S::Divide);
        engine.set_accumulator(Some(4.0));
        engine.perform_operation(S::Calculate);
        assert_eq!(engine.accumulator(), Some(1.5));
    }

    #[test]
    fn test_calculate_without_pending_is_noop() {
        let mut engine = engine_with(42.0);
        engine.perform_operation(S::Calculate);
        assert_eq!(engine.accumulator(), Some(42.0));

        engine.set_accumulator(None);
        engine.perform_operation(S::Calculate);
        assert_eq!(engine.accumulator(), None);
    }

    #[test]
    fn test_calculate_without_right_operand_keeps_pending() {
        let mut engine = engine_with(2.0);
        engine.perform_operation(S::Multiply);
        engine.perform_operation(S::Calculate);

        assert_eq!(engine.accumulator(), None);
        assert_eq!(engine.pending_left_operand(), Some(2.0));
    }

    #[test]
    fn test_binary_chains_left_to_right() {
        let mut engine = engine_with(5.0);
        engine.perform_operation(S::Add);
        engine.set_accumulator(Some(3.0));
        engine.perform_operation(S::Multiply);

        assert_eq!(engine.pending_symbol(), Some(S::Multiply));
        assert_eq!(engine.pending_left_operand(), Some(8.0));

        engine.set_accumulator(Some(2.0));
        engine.perform_operation(S::Calculate);
        assert_eq!(engine.accumulator(), Some(16.0));
    }

    #[test]
    fn test_binary_without_accumulator_is_noop() {
        let mut engine = ArithmeticEngine::new();
        engine.clear_accumulator();
        engine.perform_operation(S::Add);
        assert_eq!(engine.pending_symbol(), None);
    }

    #[test]
    fn test_unary_operations() {
        let mut engine = engine_with(100.0);
        engine.perform_operation(S::Percent);
        assert_eq!(engine.accumulator(), Some(1.0));

        engine.perform_operation(S::ChangeSign);
        assert_eq!(engine.accumulator(), Some(-1.0));
    }

    #[test]
    fn test_unary_without_accumulator_is_noop() {
        let mut engine = ArithmeticEngine::new();
        engine.clear_accumulator();
        engine.perform_operation(S::ChangeSign);
        assert_eq!(engine.accumulator(), None);
    }

    #[test]
    fn test_unary_leaves_pending_untouched() {
        let mut engine = engine_with(50.0);
        engine.perform_operation(S::Add);
        engine.set_accumulator(Some(10.0));
        engine.perform_operation(S::Percent);

        assert_eq!(engine.accumulator(), Some(0.1));
        assert_eq!(engine.pending_symbol(), Some(S::Add));
    }

    #[test]
    fn test_symbols_without_operation_are_ignored() {
        let mut engine = engine_with(9.0);
        for symbol in [S::Three, S::Decimal, S::Clear, S::AllClear] {
            engine.perform_operation(symbol);
        }
        assert_eq!(engine, engine_with(9.0));
    }

    #[test]
    fn test_division_by_zero_propagates_infinity() {
        let mut engine = engine_with(7.0);
        engine.perform_operation(S::Divide);
        engine.set_accumulator(Some(0.0));
        engine.perform_operation(S::Calculate);
        assert_eq!(engine.accumulator(), Some(f64::INFINITY));
    }

    #[test]
    fn test_clear_all() {
        let mut engine = engine_with(3.0);
        engine.perform_operation(S::Add);
        engine.clear_all();

        assert_eq!(engine.accumulator(), None);
        assert_eq!(engine.pending_symbol(), None);
    }
}
