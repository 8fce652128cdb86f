/*!
# `[LET] <variable>=<expression>`

## Purpose
Assign a value to a variable or an array cell.

## Remarks
The word `LET` is optional. Variable names are a letter with an optional
digit, so `A`, `A0` and `Z9` are all different variables. All variables
start at 0 when a program is run.

## Example
```text
10 LET A=2
20 B1=A*3
30 DIM C(4)
40 C(A)=B1+1
50 PRINT C(2)
RUN
7
```

*/
