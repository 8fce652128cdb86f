/*!
# `NEXT [<variable>]`

## Purpose
Close the most recent `FOR` loop.

## Remarks
The step is added to the loop variable. While the variable has not
passed the end, execution continues at the line after the `FOR`.
Otherwise the loop is finished and execution continues with the next line.

Naming a variable other than the one in the innermost loop is a
`NEXT VARIABLE MISMATCH` error. `NEXT` with no active loop is a
`NEXT WITHOUT FOR` error.

## Example
```text
10 FOR I=1 TO 2
20 FOR J=1 TO 2
30 PRINT I*10+J
40 NEXT J
50 NEXT I
RUN
11
12
21
22
```

*/
