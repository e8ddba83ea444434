/*!
# `WRITE <variable>`

## Purpose
Print the current value of a variable on its own line.

## Remarks
Variables that were never assigned print `0`.
The keyword must be uppercase, the variable may be either case.
Anything after the variable name is ignored, so `WRITE A, B` and
`WRITE A=5` both print `A`. The name is still a single letter:
`WRITE AB` is not a `WRITE` and is skipped.

## Example
```text
WRITE Q
q = -7
WRITE Q
```
Prints `0` then `-7`.

*/
