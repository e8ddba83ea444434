/*!
# Introduction to Minitran

Minitran programs are plain text files, conventionally ending in `.mt`.
Run one by passing its path:

```text
$ minitran sum.mt
15
```

Statements run from top to bottom, one per line, until the last line
or an `END`. There are 26 integer variables named `A` to `Z`, each
starting at zero. The only arithmetic is addition.

```text
C sum.mt
A = 5
B = A + 10
WRITE B
END
```

Set `RUST_LOG=debug` to see each statement as it runs, on standard error.

*/
