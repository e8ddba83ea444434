/*!
# `<variable> = <expression>`

## Purpose
Assign the value of the expression to the variable.

## Remarks
The variable is a single letter. Lowercase and uppercase letters
name the same variable. Spaces around `=` and `+` are optional.

An expression is one or more terms joined by `+`. A term is either a
variable or a decimal integer with an optional sign. Terms that are
neither count as zero, and a term only reads up to its first
non-digit, so `10 - 4` is just `10`. Sums wrap around past
2147483647.

A line with a longer name before `=`, such as `AB = 1`, is not an
assignment and is skipped.

## Example
```text
A = 5
b = a + 10
WRITE B
```
Prints `15`.

*/
