/*!
# `DIM <letter>(<bound>)[,...]`

## Purpose
Create an array of numbers for a plain letter.

## Remarks
Only the letters A to Z may name an array; `DIM A1(5)` is a `SYNTAX ERROR`.
The bound is inclusive so `DIM X(10)` allows `X(0)` to `X(10)`.
Fractional bounds are truncated toward zero and a negative bound
makes an array of one cell.

Dimensioning a letter again throws away the old array and starts
over with zeros. Arrays do not survive `RUN`.

Reading outside an array reports `SUBSCRIPT OUT OF RANGE` and uses 0
for the value; the program keeps going. Writing outside an array
stops the program.

## Example
```text
10 DIM A(3), B(2)
20 LET A(2)=5
30 PRINT A(2)
40 PRINT A(9)
RUN
5
SUBSCRIPT OUT OF RANGE IN 40 (6..10); ARRAY A INDEX 9 OUT OF BOUNDS
0
```
*/
