use crate::{
    ast::{
        CallExpression, Expression, FunctionLiteral, IfExpression, Node, PrefixExpression,
        Program, Statement,
    },
    object::{Environment, Function, MutableEnvironment, Object, RObject},
};
use std::rc::Rc;

pub use error::EvalError;

mod error;

pub type EvalResult = Result<RObject, EvalError>;

/// Tree-walking evaluator. It owns the three shared value singletons; every
/// boolean or null it produces is an `Rc` clone of one of them.
pub struct Evaluator {
    null: RObject,
    true_obj: RObject,
    false_obj: RObject,
}

/// Evaluates a node in the given environment with a fresh evaluator.
pub fn eval(node: &Node, env: &MutableEnvironment) -> EvalResult {
    Evaluator::new().eval(node, env)
}

/// Evaluates a whole program in the given environment.
pub fn eval_program(program: &Program, env: &MutableEnvironment) -> EvalResult {
    Evaluator::new().eval_program(program, env)
}

impl Evaluator {
    pub fn new() -> Evaluator {
        Evaluator {
            null: Rc::new(Object::Null),
            true_obj: Rc::new(Object::Boolean(true)),
            false_obj: Rc::new(Object::Boolean(false)),
        }
    }

    pub fn eval(&self, node: &Node, env: &MutableEnvironment) -> EvalResult {
        match node {
            Node::Program(p) => self.eval_program(p, env),
            Node::Statement(s) => self.eval_statement(s, env),
            Node::Expression(e) => self.eval_expression(e, env),
            Node::BlockStatement(b) => self.eval_statements(&b.statements, false, env),
        }
    }

    pub fn eval_program(&self, program: &Program, env: &MutableEnvironment) -> EvalResult {
        self.eval_statements(&program.statements, true, env)
    }

    /// Runs statements in order and yields the value of the last one. A
    /// `Return` wrapper stops the walk; at a program or call boundary
    /// (`is_outermost`) it is unwrapped, inside a nested block it keeps
    /// propagating outward.
    fn eval_statements(
        &self,
        statements: &[Statement],
        is_outermost: bool,
        env: &MutableEnvironment,
    ) -> EvalResult {
        let mut result = Rc::clone(&self.null);
        for statement in statements.iter() {
            result = self.eval_statement(statement, env)?;
            if result.is_return() {
                return Ok(if is_outermost {
                    result.get_return().unwrap_or(result)
                } else {
                    result
                });
            }
        }
        Ok(result)
    }

    fn eval_statement(&self, statement: &Statement, env: &MutableEnvironment) -> EvalResult {
        Ok(match statement {
            Statement::LetStatement(s) => {
                let value = self.eval_expression(&s.value, env)?;
                env.borrow_mut().set(&s.name.name, &value);
                value
            }
            Statement::ReturnStatement(s) => Rc::new(Object::Return(
                self.eval_expression(&s.return_value, env)?,
            )),
            Statement::ExpressionStatement(s) => self.eval_expression(&s.expression, env)?,
        })
    }

    fn eval_expression(&self, expression: &Expression, env: &MutableEnvironment) -> EvalResult {
        match expression {
            Expression::IntegerLiteral(e) => Ok(Rc::new(Object::Integer(e.value))),
            Expression::Boolean(e) => Ok(self.bool_object(e.value)),
            Expression::Identifier(e) => env.borrow().get(&e.name).ok_or_else(|| {
                EvalError(format!("identifier not found: {}", e.name))
            }),
            Expression::PrefixExpression(e) => self.eval_prefix_expression(e, env),
            Expression::InfixExpression(e) => {
                let left = self.eval_expression(&e.left, env)?;
                let right = self.eval_expression(&e.right, env)?;
                self.eval_infix_expression(&e.operator, &left, &right)
            }
            Expression::IfExpression(e) => self.eval_if_expression(e, env),
            Expression::FunctionLiteral(e) => Ok(self.eval_function_literal(e, env)),
            Expression::CallExpression(e) => self.eval_call_expression(e, env),
        }
    }

    fn eval_prefix_expression(
        &self,
        expression: &PrefixExpression,
        env: &MutableEnvironment,
    ) -> EvalResult {
        let right = self.eval_expression(&expression.right, env)?;
        match expression.operator.as_str() {
            "!" => Ok(self.eval_bang_operator_expression(&right)),
            "-" => match right.as_ref() {
                Object::Integer(value) => Ok(Rc::new(Object::Integer(-value))),
                _ => Err(EvalError(format!(
                    "unknown operator: -{}",
                    right.type_name()
                ))),
            },
            operator => Err(EvalError(format!(
                "unknown operator: {}{}",
                operator,
                right.type_name()
            ))),
        }
    }

    fn eval_bang_operator_expression(&self, right: &RObject) -> RObject {
        match right.as_ref() {
            Object::Boolean(true) => Rc::clone(&self.false_obj),
            Object::Boolean(false) => Rc::clone(&self.true_obj),
            Object::Null => Rc::clone(&self.true_obj),
            _ => Rc::clone(&self.false_obj),
        }
    }

    fn eval_infix_expression(
        &self,
        operator: &str,
        left: &RObject,
        right: &RObject,
    ) -> EvalResult {
        match (left.as_ref(), right.as_ref()) {
            (Object::Integer(l), Object::Integer(r)) => {
                self.eval_integer_infix_expression(operator, *l, *r)
            }
            (Object::Boolean(l), Object::Boolean(r)) => match operator {
                "==" => Ok(self.bool_object(l == r)),
                "!=" => Ok(self.bool_object(l != r)),
                _ => Err(EvalError(format!(
                    "unknown operator: {} {} {}",
                    left.type_name(),
                    operator,
                    right.type_name()
                ))),
            },
            _ if left.type_name() != right.type_name() => Err(EvalError(format!(
                "type mismatch: {} {} {}",
                left.type_name(),
                operator,
                right.type_name()
            ))),
            _ => Err(EvalError(format!(
                "unknown operator: {} {} {}",
                left.type_name(),
                operator,
                right.type_name()
            ))),
        }
    }

    fn eval_integer_infix_expression(&self, operator: &str, left: i64, right: i64) -> EvalResult {
        let result = match operator {
            "+" => Object::Integer(left + right),
            "-" => Object::Integer(left - right),
            "*" => Object::Integer(left * right),
            "/" => {
                if right == 0 {
                    return Err(EvalError("division by zero".to_owned()));
                }
                // Rust's `/` already truncates toward zero.
                Object::Integer(left / right)
            }
            "<" => return Ok(self.bool_object(left < right)),
            ">" => return Ok(self.bool_object(left > right)),
            "==" => return Ok(self.bool_object(left == right)),
            "!=" => return Ok(self.bool_object(left != right)),
            _ => {
                return Err(EvalError(format!(
                    "unknown operator: INTEGER {} INTEGER",
                    operator
                )))
            }
        };
        Ok(Rc::new(result))
    }

    fn eval_if_expression(
        &self,
        expression: &IfExpression,
        env: &MutableEnvironment,
    ) -> EvalResult {
        let condition = self.eval_expression(&expression.condition, env)?;
        if Evaluator::is_truthy(&condition) {
            return self.eval_statements(&expression.consequence.statements, false, env);
        }
        match &expression.alternative {
            Some(alternative) => self.eval_statements(&alternative.statements, false, env),
            None => Ok(Rc::clone(&self.null)),
        }
    }

    fn eval_function_literal(
        &self,
        literal: &FunctionLiteral,
        env: &MutableEnvironment,
    ) -> RObject {
        Rc::new(Object::Function(Function {
            environment: Rc::clone(env),
            parameters: Rc::clone(&literal.parameters),
            body: Rc::clone(&literal.body),
        }))
    }

    fn eval_call_expression(
        &self,
        expression: &CallExpression,
        env: &MutableEnvironment,
    ) -> EvalResult {
        let function = self.eval_expression(&expression.function, env)?;
        let arguments = self.eval_expressions(&expression.arguments, env)?;

        let function = match function.as_ref() {
            Object::Function(f) => f,
            _ => {
                return Err(EvalError(format!(
                    "not a function: {}",
                    function.type_name()
                )))
            }
        };
        if arguments.len() != function.parameters.len() {
            return Err(EvalError(format!(
                "wrong number of arguments: got={}, want={}",
                arguments.len(),
                function.parameters.len()
            )));
        }

        // Bind arguments in a fresh scope enclosing the captured one.
        let extended_env = Environment::new_enclosed(&function.environment);
        for (parameter, argument) in function.parameters.iter().zip(arguments.iter()) {
            extended_env.borrow_mut().set(&parameter.name, argument);
        }
        self.eval_statements(&function.body.statements, true, &extended_env)
    }

    fn eval_expressions(
        &self,
        expressions: &[Expression],
        env: &MutableEnvironment,
    ) -> Result<Vec<RObject>, EvalError> {
        let mut result = Vec::with_capacity(expressions.len());
        for expression in expressions {
            result.push(self.eval_expression(expression, env)?);
        }
        Ok(result)
    }

    fn is_truthy(object: &Object) -> bool {
        match object {
            Object::Boolean(value) => *value,
            Object::Null => false,
            _ => true,
        }
    }

    fn bool_object(&self, value: bool) -> RObject {
        if value {
            Rc::clone(&self.true_obj)
        } else {
            Rc::clone(&self.false_obj)
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::new()
    }
}
