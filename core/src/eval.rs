use log::debug;

use crate::error::EvalError;
use crate::expr::{Expr, MAX_NESTING_DEPTH};
use crate::scope::Scope;
use crate::variant::Variant;

// ============================================================================
// Evaluator
// ============================================================================

impl Expr {
    /// Evaluate into `scope`, leaving the result as its evaluated value.
    pub fn eval<'s, 'p>(&self, scope: &'s mut Scope<'p>) -> &'s mut Scope<'p> {
        let value = self.evaluate(scope);
        scope.set_evaluated_value(value);
        scope
    }

    /// Evaluate against `scope` and return the result. Failures come back as
    /// `Variant::Error`.
    pub fn evaluate(&self, scope: &Scope<'_>) -> Variant {
        evaluate_at(self, scope, 0)
    }
}

/// `depth` counts the lists enclosing `expr`.
fn evaluate_at(expr: &Expr, scope: &Scope<'_>, depth: usize) -> Variant {
    match expr {
        Expr::Null => Variant::Null,
        Expr::Atom { value, .. } => match value {
            Variant::Identifier(name) => scope.resolve(*name),
            literal => literal.clone(),
        },
        Expr::List(_) if depth == MAX_NESTING_DEPTH => EvalError::NestingTooDeep.into(),
        Expr::List(children) => evaluate_list(children, scope, depth + 1),
    }
}

fn evaluate_list(children: &[Expr], scope: &Scope<'_>, depth: usize) -> Variant {
    let Some((head, rest)) = children.split_first() else {
        return Variant::Null;
    };

    let function = match evaluate_at(head, scope, depth) {
        Variant::Function(function) => function,
        err @ Variant::Error(EvalError::NestingTooDeep) => return err,
        _ => return EvalError::FunctionNameNotFound(head.to_string()).into(),
    };

    let args: Vec<Variant> = rest
        .iter()
        .map(|arg| evaluate_argument(arg, scope, depth))
        .collect();

    debug!("calling {} with {} arguments", function.name(), args.len());
    function.call(&args)
}

/// Nested lists get a child scope of their own; everything else evaluates in
/// place.
fn evaluate_argument(arg: &Expr, scope: &Scope<'_>, depth: usize) -> Variant {
    match arg {
        Expr::List(_) => {
            let child = Scope::new(Some(scope));
            evaluate_at(arg, &child, depth)
        }
        _ => evaluate_at(arg, scope, depth),
    }
}
