/*!
# `PRINT <expression>` or `PRINT "<text>"`

## Purpose
Print a value or some text on its own line.

## Remarks
Text may be quoted with either `"` or `'`; everything up to the matching
quote is printed as is. Numbers print with up to six significant digits
and switch to exponent form when very large or very small.

## Example
```text
10 PRINT 'HELLO, WORLD'
20 PRINT 1/3
30 PRINT 1234567
RUN
HELLO, WORLD
0.333333
1.23457e+06
```

*/
