/*!
# `IF <condition> THEN <line number>`

## Purpose
Jump to a line when a condition holds.

## Remarks
The condition is either a comparison using one of
`=`, `==`, `<>`, `<`, `<=`, `>`, `>=`, or a single expression
which holds when it is not zero.

An `IF` without `THEN` evaluates its condition and does nothing else.

## Example
```text
10 A=10
20 PRINT A
30 A=A+10
40 IF A<30 THEN 20
RUN
10
20
```

*/
