/*!
# Errors

Errors show the line number and the columns of the statement that failed.
```text
10 PRINT 1
20 GOTO 99
RUN
1
UNDEFINED LINE IN 20 (0..4); LINE 99 NOT FOUND
```

A line with a mistake in it is still stored. The mistake is reported
when that line runs, so everything before it works as usual.

| Error | Cause |
|-------|-------|
| `SYNTAX ERROR` | A statement could not be understood. |
| `UNDEFINED LINE` | `GOTO` or `THEN` to a line that doesn't exist. |
| `FOR WITHOUT NEXT` | A skipped `FOR` loop has no closing `NEXT`. |
| `NEXT WITHOUT FOR` | `NEXT` with no active loop. |
| `NEXT VARIABLE MISMATCH` | `NEXT` names a variable other than the innermost loop's. |
| `FOR STACK OVERFLOW` | Too many loops active at once. |
| `UNDIMENSIONED ARRAY` | An array used before `DIM`. |
| `SUBSCRIPT OUT OF RANGE` | An array index below 0 or past the bound. |
| `OUT OF MEMORY` | The program is full, or an array is too large. |
| `LINE BUFFER OVERFLOW` | A line longer than 512 characters. |
| `DIRECT STATEMENT IN FILE` | A line without a line number in a loaded file. |
| `UNKNOWN COMMAND` | Typed input that is not a command or a numbered line. |
| `FILE NOT FOUND` | `LOAD` of a missing file. |

Only `SUBSCRIPT OUT OF RANGE` and `UNDIMENSIONED ARRAY` when reading an
array let the program continue; the value read is 0.
*/
