/*!
# Expressions and Variables

All values are floating point numbers. A variable name is one letter,
optionally followed by one digit, which gives 286 variables in all.
Letters may be typed in either case, `a1` and `A1` are the same variable.

```text
LET A = 1.5
B7 = A * 2
```

Arrays belong to the plain letters only and must be created with `DIM`
before use. An array and a variable with the same letter are separate.

```text
DIM A(10)
A(3) = A + 1
```

Numbers are written in the usual decimal forms, with an optional exponent.

```text
PRINT 12, .5, 1.5E3, 2E-2
```

## Operators

From highest to lowest precedence:

 * Unary `+` and `-`, which may be repeated: `--5` is 5.
 * `*` and `/`
 * `+` and `-`

Operators of the same precedence work left to right, so `8-2-1` is 5.
Parentheses group as you would expect. A closing parenthesis left off at
the end is supplied for you, so `PRINT (2+3` prints 5. A missing operand
counts as 0, and anything after a complete statement is ignored.

Dividing by zero does not stop the program. The divisor is taken as 1,
so `10/0` is 10.

## Conditions

`IF` compares two expressions with `=` (or `==`), `<>`, `<`, `<=`, `>`, `>=`.
A lone expression is true when it is not zero.
*/
