/*!
# `END`

## Purpose
Stop the program.

## Remarks
Anything after `END` on the line is ignored. Running past the last
line of the program also stops it.

## Example
```text
10 PRINT "BEFORE"
20 END
30 PRINT "AFTER"
RUN
BEFORE
```
*/
