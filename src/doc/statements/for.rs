/*!
# `FOR <variable>=x TO y [STEP z]`
Where x, y, and z are expressions.
## Purpose
Used with `NEXT` to repeat execution of lines
while iterating over a sequence of numbers.

## Remarks
If we wanted the numbers 1,3,5,7 we would write `FOR I=1 TO 7 STEP 2`.
On the first iteration, 1 will be assigned to variable I.
Lines execute until a `NEXT` line.
On subsequent iterations, the variable I gets 2 added to it.
If the result passes 7 the loop ends.
Otherwise execution continues at the line after the `FOR`.

x, y and z are evaluated once, in that order, before the variable is
assigned. A `STEP` of zero counts by one.

When the start is already past the end, the body is skipped. The lines
that follow are searched for the `NEXT` that closes this loop, counting
any nested `FOR` and `NEXT` lines on the way, and execution resumes after
it. No closing `NEXT` is a `FOR WITHOUT NEXT` error.

At most 256 loops may be active at once.

## Example 1
```text
10 FOR I=1 TO 7 STEP 2
20 PRINT I
30 NEXT I
RUN
1
3
5
7
```

## Example 2
```text
10 FOR X=5 TO 1
20 PRINT "NEVER"
30 NEXT X
40 PRINT X
RUN
5
```

*/
